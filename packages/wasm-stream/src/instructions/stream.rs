//! Streaming program instruction encoding.
//!
//! # Wire Format
//!
//! Every instruction starts with a single opcode byte, followed by the
//! borsh encoding of its input struct:
//! - 1: CreateStream (`CreateStreamInput`, 64 bytes)
//! - 2: Withdraw (`WithdrawInput`, 8 bytes)
//! - 3: Cancel (no payload)
//!
//! Field order inside each struct is part of the wire contract.

use crate::error::WasmStreamError;
use crate::pubkey::Pubkey;
use borsh::{BorshDeserialize, BorshSerialize};

pub const CREATE_STREAM_OPCODE: u8 = 1;
pub const WITHDRAW_OPCODE: u8 = 2;
pub const CANCEL_OPCODE: u8 = 3;

/// Instruction data for opening a stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct CreateStreamInput {
    /// Unix seconds.
    pub start_time: u64,
    /// Unix seconds, expected to be after `start_time`.
    pub end_time: u64,
    /// Raw receiver public key.
    pub receiver: [u8; 32],
    /// Always 0 for a new stream.
    pub lamports_withdrawn: u64,
    /// Lamports paid out per second.
    pub amount_second: u64,
}

impl CreateStreamInput {
    pub fn new(start_time: u64, end_time: u64, receiver: &Pubkey, amount_second: u64) -> Self {
        CreateStreamInput {
            start_time,
            end_time,
            receiver: receiver.to_bytes(),
            lamports_withdrawn: 0,
            amount_second,
        }
    }

    pub fn receiver_pubkey(&self) -> Pubkey {
        Pubkey::new_from_array(self.receiver)
    }
}

/// Instruction data for withdrawing from a stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct WithdrawInput {
    /// Lamports requested.
    pub amount: u64,
}

/// A decoded streaming program instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamInstruction {
    CreateStream(CreateStreamInput),
    Withdraw(WithdrawInput),
    Cancel,
}

impl StreamInstruction {
    pub fn opcode(&self) -> u8 {
        match self {
            Self::CreateStream(_) => CREATE_STREAM_OPCODE,
            Self::Withdraw(_) => WITHDRAW_OPCODE,
            Self::Cancel => CANCEL_OPCODE,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CreateStream(_) => "CreateStream",
            Self::Withdraw(_) => "Withdraw",
            Self::Cancel => "Cancel",
        }
    }

    /// Encode as `opcode ++ borsh(input)`.
    pub fn pack(&self) -> Result<Vec<u8>, WasmStreamError> {
        let mut data = vec![self.opcode()];
        let payload = match self {
            Self::CreateStream(input) => borsh::to_vec(input),
            Self::Withdraw(input) => borsh::to_vec(input),
            Self::Cancel => Ok(Vec::new()),
        }
        .map_err(|e| WasmStreamError::Encoding(format!("Failed to encode {}: {}", self.as_str(), e)))?;
        data.extend_from_slice(&payload);
        Ok(data)
    }

    /// Decode instruction data produced by `pack`.
    pub fn unpack(data: &[u8]) -> Result<Self, WasmStreamError> {
        let (&opcode, rest) = data
            .split_first()
            .ok_or_else(|| WasmStreamError::Encoding("Empty instruction data".to_string()))?;

        match opcode {
            CREATE_STREAM_OPCODE => CreateStreamInput::try_from_slice(rest)
                .map(Self::CreateStream)
                .map_err(|e| WasmStreamError::Encoding(format!("Failed to decode CreateStream: {}", e))),
            WITHDRAW_OPCODE => WithdrawInput::try_from_slice(rest)
                .map(Self::Withdraw)
                .map_err(|e| WasmStreamError::Encoding(format!("Failed to decode Withdraw: {}", e))),
            CANCEL_OPCODE if rest.is_empty() => Ok(Self::Cancel),
            CANCEL_OPCODE => Err(WasmStreamError::Encoding(format!(
                "Cancel takes no payload, got {} extra bytes",
                rest.len()
            ))),
            other => Err(WasmStreamError::Encoding(format!("Unknown opcode: {}", other))),
        }
    }
}
