//! On-chain stream record.
//!
//! The program stores the create input followed by the sender key, so the
//! account is exactly `64 + 32 = 96` bytes.

use crate::error::WasmStreamError;
use crate::pubkey::Pubkey;
use borsh::{BorshDeserialize, BorshSerialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct StreamState {
    pub start_time: u64,
    pub end_time: u64,
    pub receiver: [u8; 32],
    pub lamports_withdrawn: u64,
    pub amount_second: u64,
    pub sender: [u8; 32],
}

impl StreamState {
    pub const LEN: usize = 8 + 8 + 32 + 8 + 8 + 32;

    /// Decode raw account data. Trailing bytes are rejected.
    pub fn from_account_data(data: &[u8]) -> Result<Self, WasmStreamError> {
        if data.len() != Self::LEN {
            return Err(WasmStreamError::Encoding(format!(
                "Invalid stream account length: expected {} bytes, got {}",
                Self::LEN,
                data.len()
            )));
        }
        Self::try_from_slice(data)
            .map_err(|e| WasmStreamError::Encoding(format!("Failed to decode stream account: {}", e)))
    }

    pub fn receiver_pubkey(&self) -> Pubkey {
        Pubkey::new_from_array(self.receiver)
    }

    pub fn sender_pubkey(&self) -> Pubkey {
        Pubkey::new_from_array(self.sender)
    }

    /// Lamports accrued by `now`, clamped to the stream window.
    pub fn streamed_amount_at(&self, now: u64) -> u64 {
        let elapsed = now.clamp(self.start_time, self.end_time.max(self.start_time)) - self.start_time;
        elapsed.saturating_mul(self.amount_second)
    }

    /// Lamports the receiver can still take out at `now`.
    pub fn withdrawable_at(&self, now: u64) -> u64 {
        self.streamed_amount_at(now)
            .saturating_sub(self.lamports_withdrawn)
    }
}
