//! `WalletSigner` backed by a wallet-adapter object.
//!
//! The wallet must expose `publicKey` (a base58 string or an object with
//! `toBase58()`) and `sendTransaction(bytes, connection)` resolving to the
//! base58 signature. Transactions are passed as unsigned wire bytes.

use crate::client::WalletSigner;
use crate::error::WasmStreamError;
use crate::pubkey::{Pubkey, PubkeyExt};
use crate::transaction::TransactionExt;
use solana_sdk::signature::Signature;
use solana_transaction::Transaction;
use std::str::FromStr;
use wasm_bindgen::prelude::*;

use super::connection::{call_method, get_property};

#[derive(Debug, Clone)]
pub struct JsWallet {
    inner: JsValue,
    connection: JsValue,
}

impl JsWallet {
    pub fn new(inner: JsValue, connection: JsValue) -> Self {
        JsWallet { inner, connection }
    }
}

fn wallet_error(e: WasmStreamError) -> WasmStreamError {
    match e {
        WasmStreamError::Wallet(_) => e,
        other => WasmStreamError::Wallet(other.to_string()),
    }
}

impl WalletSigner for JsWallet {
    fn public_key(&self) -> Result<Pubkey, WasmStreamError> {
        let key = get_property(&self.inner, "publicKey")
            .map_err(|_| WasmStreamError::Wallet("Wallet is not connected".to_string()))?;

        let address = match key.as_string() {
            Some(s) => s,
            None => {
                let to_base58 = js_sys::Reflect::get(&key, &JsValue::from_str("toBase58"))
                    .map_err(|e| wallet_error(e.into()))?;
                let func: js_sys::Function = to_base58
                    .dyn_into()
                    .map_err(|_| WasmStreamError::Wallet("publicKey has no toBase58".to_string()))?;
                func.call0(&key)
                    .map_err(|e| wallet_error(e.into()))?
                    .as_string()
                    .ok_or_else(|| WasmStreamError::Wallet("toBase58 returned a non-string".to_string()))?
            }
        };

        Pubkey::from_base58(&address)
            .map_err(|_| WasmStreamError::Wallet(format!("Invalid wallet public key: {}", address)))
    }

    async fn send_transaction(&self, transaction: &Transaction) -> Result<Signature, WasmStreamError> {
        let bytes = transaction.to_bytes().map_err(wallet_error)?;
        let array = js_sys::Uint8Array::from(bytes.as_slice());

        let value = call_method(
            &self.inner,
            "sendTransaction",
            &[array.into(), self.connection.clone()],
        )
        .await
        .map_err(wallet_error)?;

        let signature = value
            .as_string()
            .ok_or_else(|| WasmStreamError::Wallet("sendTransaction returned a non-string".to_string()))?;
        Signature::from_str(&signature)
            .map_err(|e| WasmStreamError::Wallet(format!("Invalid signature {}: {}", signature, e)))
    }
}
