//! Program constants exported via WASM.
//!
//! Lets JavaScript reference the deployed streaming program and its wire
//! constants without hardcoding them a second time.

use wasm_bindgen::prelude::*;

use crate::builder::{ADMIN_FEE_MARGIN, STREAM_ACCOUNT_SPACE};
use crate::config::{DEFAULT_ADMIN_ACCOUNT, DEFAULT_PROGRAM_ID, DEFAULT_SEED_PREFIX};
use crate::instructions::{CANCEL_OPCODE, CREATE_STREAM_OPCODE, WITHDRAW_OPCODE};

/// Streaming program ID (devnet deployment)
#[wasm_bindgen]
pub fn stream_program_id() -> String {
    DEFAULT_PROGRAM_ID.to_string()
}

/// Account that receives the admin fee
#[wasm_bindgen]
pub fn admin_account() -> String {
    DEFAULT_ADMIN_ACCOUNT.to_string()
}

/// System Program ID
#[wasm_bindgen]
pub fn system_program_id() -> String {
    solana_system_interface::program::ID.to_string()
}

/// Stream account space in bytes (96)
#[wasm_bindgen]
pub fn stream_account_space() -> u64 {
    STREAM_ACCOUNT_SPACE
}

/// Lamports added on top of the streamed total for the admin fee (300000)
#[wasm_bindgen]
pub fn admin_fee_margin() -> u64 {
    ADMIN_FEE_MARGIN
}

#[wasm_bindgen]
pub fn create_stream_opcode() -> u8 {
    CREATE_STREAM_OPCODE
}

#[wasm_bindgen]
pub fn withdraw_opcode() -> u8 {
    WITHDRAW_OPCODE
}

#[wasm_bindgen]
pub fn cancel_opcode() -> u8 {
    CANCEL_OPCODE
}

/// Generate a fresh stream account seed.
///
/// @param prefix - Optional seed prefix, defaults to "abcdef"
/// @returns A seed of at most 32 characters
#[wasm_bindgen]
pub fn generate_seed(prefix: Option<String>) -> String {
    crate::seed::generate_seed(prefix.as_deref().unwrap_or(DEFAULT_SEED_PREFIX))
}
