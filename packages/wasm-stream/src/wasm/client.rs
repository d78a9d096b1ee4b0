//! The action layer exposed to JavaScript.
//!
//! Every method resolves to an event object `{ type, result, ... }` ready to
//! hand to a store's `dispatch`. Failures resolve to the matching `*_FAILED`
//! event; the returned promise only rejects if the event cannot be
//! converted to a JS value.

use crate::actions::{StreamClient, StreamEvent};
use crate::builder::{deserialize_amount, CreateStreamParams};
use crate::config::{ProgramConfig, StreamConfig};
use crate::console_log;
use crate::error::WasmStreamError;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use super::connection::JsConnection;
use super::indexer::FetchIndexer;
use super::wallet::JsWallet;

/// Parse a JS config object; `undefined` or `null` selects the defaults.
pub(crate) fn config_from_js(value: JsValue) -> Result<ProgramConfig, WasmStreamError> {
    let config: StreamConfig = if value.is_undefined() || value.is_null() {
        StreamConfig::default()
    } else {
        serde_wasm_bindgen::from_value(value)
            .map_err(|e| WasmStreamError::InvalidInput(format!("Failed to parse config: {}", e)))?
    };
    config.resolve()
}

#[derive(Deserialize)]
struct Amount(#[serde(deserialize_with = "deserialize_amount")] u64);

/// Read a lamport or timestamp value passed as number, BigInt or string.
pub(crate) fn amount_from_js(value: JsValue, field: &str) -> Result<u64, WasmStreamError> {
    serde_wasm_bindgen::from_value::<Amount>(value)
        .map(|a| a.0)
        .map_err(|e| WasmStreamError::InvalidInput(format!("Invalid {}: {}", field, e)))
}

fn event_to_js(event: &StreamEvent) -> Result<JsValue, JsValue> {
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    event
        .serialize(&serializer)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Stream action client bound to one JS `Connection`.
#[wasm_bindgen]
pub struct WasmStreamClient {
    inner: StreamClient<JsConnection, FetchIndexer>,
}

#[wasm_bindgen]
impl WasmStreamClient {
    /// @param config - Optional `{ programId, adminAccount, clusterUrl, commitment, indexerUrl, seedPrefix }`
    /// @param connection - A web3.js `Connection` (or anything with the same methods)
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue, connection: JsValue) -> Result<WasmStreamClient, JsValue> {
        let config = config_from_js(config)?;
        console_log!(
            "stream client: program {} on {}",
            config.program_id,
            config.cluster_url
        );

        let connection = JsConnection::new(connection, &config.commitment);
        let indexer = FetchIndexer::new(&config);
        Ok(WasmStreamClient {
            inner: StreamClient::new(config, connection, indexer),
        })
    }

    #[wasm_bindgen(getter, js_name = programId)]
    pub fn program_id(&self) -> String {
        self.inner.config().program_id.to_string()
    }

    /// Open a stream. Resolves to `CREATE_RESPONSE` with the new stream
    /// address as `id`, or `CREATE_FAILED`.
    #[wasm_bindgen(js_name = createStream)]
    pub async fn create_stream(&self, params: JsValue, wallet: JsValue) -> Result<JsValue, JsValue> {
        let event = match serde_wasm_bindgen::from_value::<CreateStreamParams>(params) {
            Ok(params) => {
                self.inner
                    .create_stream(&params, &self.wallet(wallet))
                    .await
            }
            Err(e) => StreamEvent::CreateFailed {
                result: false,
                error: WasmStreamError::InvalidInput(format!("Failed to parse stream params: {}", e))
                    .to_string(),
            },
        };
        event_to_js(&event)
    }

    /// Withdraw from a stream. Resolves to `WITHDRAW_SUCCESS` or `WITHDRAW_FAILED`.
    #[wasm_bindgen]
    pub async fn withdraw(
        &self,
        stream_id: String,
        amount: JsValue,
        wallet: JsValue,
    ) -> Result<JsValue, JsValue> {
        let event = match amount_from_js(amount, "amount") {
            Ok(amount) => {
                self.inner
                    .withdraw(&stream_id, amount, &self.wallet(wallet))
                    .await
            }
            Err(e) => StreamEvent::WithdrawFailed {
                result: false,
                error: e.to_string(),
            },
        };
        event_to_js(&event)
    }

    /// Cancel a stream. Resolves to `CANCEL_SUCCESS` or `CANCEL_FAILED`.
    #[wasm_bindgen(js_name = cancelStream)]
    pub async fn cancel_stream(
        &self,
        stream_id: String,
        receiver_address: String,
        wallet: JsValue,
    ) -> Result<JsValue, JsValue> {
        let event = self
            .inner
            .cancel_stream(&stream_id, &receiver_address, &self.wallet(wallet))
            .await;
        event_to_js(&event)
    }

    /// List streams for a wallet. Resolves to `DATA_RECEIVED` or `DATA_NOT_RECEIVED`.
    #[wasm_bindgen(js_name = getAllStreams)]
    pub async fn get_all_streams(&self, wallet_address: String) -> Result<JsValue, JsValue> {
        let event = self.inner.get_all_streams(&wallet_address).await;
        event_to_js(&event)
    }
}

impl WasmStreamClient {
    fn wallet(&self, wallet: JsValue) -> JsWallet {
        JsWallet::new(wallet, self.inner.connection().inner().clone())
    }
}
