//! WASM binding for offline transaction building.
//!
//! Exposes the same builders the actions use, for callers that manage
//! blockhashes and submission themselves:
//! - `build_create_stream` - create-with-seed plus the program's create instruction
//! - `build_withdraw` - receiver withdraws from a stream
//! - `build_cancel` - sender cancels a stream
//! - `funding_lamports` - the amount a new stream account is funded with

use crate::builder::{self, CreateStreamParams};
use crate::error::WasmStreamError;
use crate::js_obj;
use crate::pubkey::{Pubkey, PubkeyExt};
use crate::transaction::TransactionExt;
use solana_sdk::hash::Hash;
use std::str::FromStr;
use wasm_bindgen::prelude::*;

use super::client::{amount_from_js, config_from_js};

/// Namespace for transaction building operations.
#[wasm_bindgen]
pub struct BuilderNamespace;

fn parse_blockhash(value: &str) -> Result<Hash, WasmStreamError> {
    Hash::from_str(value)
        .map_err(|e| WasmStreamError::InvalidInput(format!("Invalid recentBlockhash {}: {}", value, e)))
}

#[wasm_bindgen]
impl BuilderNamespace {
    /// Build an unsigned create-stream transaction.
    ///
    /// # Params
    ///
    /// ```json
    /// {
    ///   "receiverAddress": "FKjSjCqByQRwSzZoMXA7bKnDbJe41YgJTHFFzBeC42bH",
    ///   "startTime": 1700000000,
    ///   "endTime": 1700003600,
    ///   "amountSpeed": "1000"
    /// }
    /// ```
    ///
    /// @param config - Session config, or undefined for the devnet defaults
    /// @param sender - Sender wallet address (base58)
    /// @param params - Stream parameters
    /// @param seed - Seed for the stream account address
    /// @param rentExemptMinimum - Minimum balance for a 96-byte account
    /// @param recentBlockhash - Blockhash (base58)
    /// @returns `{ transaction: Uint8Array, seed, streamAddress, lamports: bigint }`
    #[wasm_bindgen]
    pub fn build_create_stream(
        config: JsValue,
        sender: &str,
        params: JsValue,
        seed: &str,
        rent_exempt_minimum: JsValue,
        recent_blockhash: &str,
    ) -> Result<JsValue, JsValue> {
        let config = config_from_js(config)?;
        let sender = Pubkey::from_base58(sender)?;
        let params: CreateStreamParams = serde_wasm_bindgen::from_value(params).map_err(|e| {
            WasmStreamError::InvalidInput(format!("Failed to parse stream params: {}", e))
        })?;
        let rent = amount_from_js(rent_exempt_minimum, "rentExemptMinimum")?;
        let blockhash = parse_blockhash(recent_blockhash)?;

        let prepared =
            builder::build_create_stream(&config, &sender, &params, seed, rent, &blockhash)?;
        let bytes = prepared.transaction.to_bytes()?;

        Ok(js_obj!(
            "transaction" => js_sys::Uint8Array::from(bytes.as_slice()),
            "seed" => prepared.seed,
            "streamAddress" => prepared.stream_address.to_string(),
            "lamports" => prepared.lamports
        )?)
    }

    /// Build an unsigned withdraw transaction paid for by the receiver.
    ///
    /// @returns Serialized transaction bytes
    #[wasm_bindgen]
    pub fn build_withdraw(
        config: JsValue,
        receiver: &str,
        stream: &str,
        amount: JsValue,
        recent_blockhash: &str,
    ) -> Result<Vec<u8>, JsValue> {
        let config = config_from_js(config)?;
        let receiver = Pubkey::from_base58(receiver)?;
        let stream = Pubkey::from_base58(stream)?;
        let amount = amount_from_js(amount, "amount")?;
        let blockhash = parse_blockhash(recent_blockhash)?;

        let tx = builder::build_withdraw(&config, &receiver, &stream, amount, &blockhash)?;
        Ok(tx.to_bytes()?)
    }

    /// Build an unsigned cancel transaction paid for by the sender.
    ///
    /// @returns Serialized transaction bytes
    #[wasm_bindgen]
    pub fn build_cancel(
        config: JsValue,
        sender: &str,
        stream: &str,
        receiver: &str,
        recent_blockhash: &str,
    ) -> Result<Vec<u8>, JsValue> {
        let config = config_from_js(config)?;
        let sender = Pubkey::from_base58(sender)?;
        let stream = Pubkey::from_base58(stream)?;
        let receiver = Pubkey::from_base58(receiver)?;
        let blockhash = parse_blockhash(recent_blockhash)?;

        let tx = builder::build_cancel(&config, &sender, &stream, &receiver, &blockhash)?;
        Ok(tx.to_bytes()?)
    }

    /// Lamports a stream must be funded with.
    ///
    /// `(endTime - startTime) * amountSpeed + 300000 + rentExemptMinimum`
    #[wasm_bindgen]
    pub fn funding_lamports(
        start_time: JsValue,
        end_time: JsValue,
        amount_speed: JsValue,
        rent_exempt_minimum: JsValue,
    ) -> Result<u64, JsValue> {
        Ok(builder::stream_funding_lamports(
            amount_from_js(start_time, "startTime")?,
            amount_from_js(end_time, "endTime")?,
            amount_from_js(amount_speed, "amountSpeed")?,
            amount_from_js(rent_exempt_minimum, "rentExemptMinimum")?,
        )?)
    }
}
