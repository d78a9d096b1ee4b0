//! WASM bindings for Solana public key (address) operations.
//!
//! Wraps `solana_sdk::pubkey::Pubkey` for JavaScript.

use crate::error::WasmStreamError;
use crate::pubkey::{Pubkey, PubkeyExt};
use wasm_bindgen::prelude::*;

/// WASM wrapper for Solana public key (address).
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct WasmPubkey {
    inner: Pubkey,
}

#[wasm_bindgen]
impl WasmPubkey {
    /// Create a Pubkey from a base58 string.
    #[wasm_bindgen]
    pub fn from_base58(address: &str) -> Result<WasmPubkey, WasmStreamError> {
        Pubkey::from_base58(address).map(|inner| WasmPubkey { inner })
    }

    /// Create a Pubkey from raw bytes (32 bytes).
    #[wasm_bindgen]
    pub fn from_bytes(bytes: &[u8]) -> Result<WasmPubkey, WasmStreamError> {
        Pubkey::from_bytes_checked(bytes).map(|inner| WasmPubkey { inner })
    }

    /// Derive the address of an account created with `createAccountWithSeed`.
    ///
    /// This is how stream account addresses are computed:
    /// `createWithSeed(wallet, seed, programId)`.
    #[wasm_bindgen(js_name = createWithSeed)]
    pub fn create_with_seed(
        base: &WasmPubkey,
        seed: &str,
        owner: &WasmPubkey,
    ) -> Result<WasmPubkey, WasmStreamError> {
        Pubkey::derive_with_seed(&base.inner, seed, &owner.inner).map(|inner| WasmPubkey { inner })
    }

    /// Convert to base58 string (the standard Solana address format).
    #[wasm_bindgen]
    pub fn to_base58(&self) -> String {
        self.inner.to_string()
    }

    /// Get as raw bytes (32 bytes).
    #[wasm_bindgen]
    pub fn to_bytes(&self) -> js_sys::Uint8Array {
        let bytes = self.inner.to_bytes();
        js_sys::Uint8Array::from(&bytes[..])
    }

    #[wasm_bindgen]
    pub fn equals(&self, other: &WasmPubkey) -> bool {
        self.inner == other.inner
    }
}

impl WasmPubkey {
    pub fn from_inner(inner: Pubkey) -> Self {
        WasmPubkey { inner }
    }

    pub fn inner(&self) -> &Pubkey {
        &self.inner
    }
}
