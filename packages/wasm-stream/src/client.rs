//! Collaborators the stream actions talk to.
//!
//! The chain connection, the wallet and the indexer live outside this crate
//! (in the browser, behind JavaScript objects). The `wasm` module provides
//! JS-backed implementations; tests use in-memory ones.
//!
//! Futures are not `Send`: everything runs on the single browser thread.
#![allow(async_fn_in_trait)]

use crate::error::WasmStreamError;
use crate::pubkey::Pubkey;
use solana_sdk::hash::Hash;
use solana_sdk::signature::Signature;
use solana_transaction::Transaction;

/// Read side of the chain connection.
pub trait ChainConnection {
    /// Minimum lamports an account of `space` bytes needs to be rent exempt.
    async fn minimum_balance_for_rent_exemption(&self, space: u64) -> Result<u64, WasmStreamError>;

    /// A blockhash recent enough to submit against.
    async fn latest_blockhash(&self) -> Result<Hash, WasmStreamError>;

    /// Wait for `signature` to reach the configured commitment.
    ///
    /// Resolves to an error if the transaction failed on chain.
    async fn confirm_transaction(&self, signature: &Signature) -> Result<(), WasmStreamError>;
}

/// The connected wallet. Key material never leaves it.
pub trait WalletSigner {
    fn public_key(&self) -> Result<Pubkey, WasmStreamError>;

    /// Sign and submit an unsigned transaction, returning its signature.
    async fn send_transaction(&self, transaction: &Transaction) -> Result<Signature, WasmStreamError>;
}

/// Backend that lists the streams of a wallet.
pub trait StreamIndexer {
    /// `GET {indexer}/{wallet_address}`; any non-200 status is an error.
    async fn get_streams(&self, wallet_address: &str) -> Result<serde_json::Value, WasmStreamError>;
}
