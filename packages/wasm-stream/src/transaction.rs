//! Solana transaction serialization helpers.
//!
//! Wraps `solana_transaction::Transaction`. Transactions leave this crate
//! unsigned in wire format; the wallet adds the signature.

use crate::error::WasmStreamError;

/// Re-export the underlying Solana Transaction type.
pub use solana_transaction::Transaction;

/// Extension trait for Transaction to add stream-friendly methods.
pub trait TransactionExt {
    /// Deserialize a transaction from raw bytes (wire format).
    fn from_bytes(bytes: &[u8]) -> Result<Transaction, WasmStreamError>;

    /// Serialize transaction to bytes (wire format).
    fn to_bytes(&self) -> Result<Vec<u8>, WasmStreamError>;

    /// Get the fee payer address as base58 string.
    fn fee_payer_string(&self) -> Option<String>;

    /// Get the recent blockhash as base58 string.
    fn blockhash_string(&self) -> String;

    /// Get the number of instructions.
    fn num_instructions(&self) -> usize;
}

impl TransactionExt for Transaction {
    fn from_bytes(bytes: &[u8]) -> Result<Transaction, WasmStreamError> {
        bincode::deserialize(bytes).map_err(|e| {
            WasmStreamError::Encoding(format!("Failed to deserialize transaction: {}", e))
        })
    }

    fn to_bytes(&self) -> Result<Vec<u8>, WasmStreamError> {
        bincode::serialize(self)
            .map_err(|e| WasmStreamError::Encoding(format!("Failed to serialize transaction: {}", e)))
    }

    fn fee_payer_string(&self) -> Option<String> {
        self.message.account_keys.first().map(|p| p.to_string())
    }

    fn blockhash_string(&self) -> String {
        self.message.recent_blockhash.to_string()
    }

    fn num_instructions(&self) -> usize {
        self.message.instructions.len()
    }
}
