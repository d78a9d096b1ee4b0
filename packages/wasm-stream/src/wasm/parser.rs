//! WASM binding for transaction and account parsing.

use crate::config::DEFAULT_PROGRAM_ID;
use crate::js_obj;
use crate::parser;
use crate::state::StreamState;
use crate::wasm::try_into_js_value::{JsConversionError, TryIntoJsValue};
use wasm_bindgen::prelude::*;

use super::client::amount_from_js;

/// Namespace for parsing operations.
#[wasm_bindgen]
pub struct ParserNamespace;

fn stream_state_to_js(state: &StreamState) -> Result<JsValue, JsConversionError> {
    js_obj!(
        "startTime" => state.start_time,
        "endTime" => state.end_time,
        "receiver" => state.receiver_pubkey().to_string(),
        "lamportsWithdrawn" => state.lamports_withdrawn,
        "amountSecond" => state.amount_second,
        "sender" => state.sender_pubkey().to_string()
    )
}

#[wasm_bindgen]
impl ParserNamespace {
    /// Parse a serialized transaction into structured data.
    ///
    /// Returns an object with:
    /// - `feePayer`: The fee payer address (base58)
    /// - `numSignatures`: Number of required signatures
    /// - `recentBlockhash`: The blockhash (base58)
    /// - `instructionsData`: Decoded instructions, each with a `type` field
    ///   (`CreateStreamAccount`, `CreateStream`, `Withdraw`, `Cancel` or `Unknown`)
    /// - `accountKeys`: All account addresses (base58)
    /// - `signatures`: Signatures (base58), empty strings for unsigned slots
    ///
    /// @param bytes - The raw transaction bytes (wire format)
    /// @param programId - Streaming program address, defaults to the devnet deployment
    #[wasm_bindgen]
    pub fn parse_transaction(bytes: &[u8], program_id: Option<String>) -> Result<JsValue, JsValue> {
        let program_id = program_id.as_deref().unwrap_or(DEFAULT_PROGRAM_ID);
        let parsed = parser::parse_transaction(bytes, program_id)?;
        Ok(parsed.try_to_js_value()?)
    }

    /// Decode the 96-byte data of a stream account.
    #[wasm_bindgen]
    pub fn decode_stream_account(data: &[u8]) -> Result<JsValue, JsValue> {
        let state = StreamState::from_account_data(data)?;
        Ok(stream_state_to_js(&state)?)
    }

    /// Lamports the receiver could withdraw at unix time `now`.
    #[wasm_bindgen]
    pub fn withdrawable_amount(data: &[u8], now: JsValue) -> Result<u64, JsValue> {
        let state = StreamState::from_account_data(data)?;
        let now = amount_from_js(now, "now")?;
        Ok(state.withdrawable_at(now))
    }
}
