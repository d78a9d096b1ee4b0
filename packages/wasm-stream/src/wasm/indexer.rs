//! `StreamIndexer` over the browser `fetch` API.

use crate::client::StreamIndexer;
use crate::config::ProgramConfig;
use crate::error::WasmStreamError;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

#[derive(Debug, Clone)]
pub struct FetchIndexer {
    config: ProgramConfig,
}

impl FetchIndexer {
    pub fn new(config: &ProgramConfig) -> Self {
        FetchIndexer {
            config: config.clone(),
        }
    }
}

fn indexer_error(e: JsValue) -> WasmStreamError {
    WasmStreamError::Indexer(WasmStreamError::from(e).to_string())
}

impl StreamIndexer for FetchIndexer {
    async fn get_streams(&self, wallet_address: &str) -> Result<serde_json::Value, WasmStreamError> {
        let opts = RequestInit::new();
        opts.set_method("GET");
        opts.set_mode(RequestMode::Cors);

        let url = self.config.streams_url(wallet_address);
        let request = Request::new_with_str_and_init(&url, &opts).map_err(indexer_error)?;
        request
            .headers()
            .set("Accept", "application/json")
            .map_err(indexer_error)?;

        let window = web_sys::window()
            .ok_or_else(|| WasmStreamError::Indexer("No window available".to_string()))?;
        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(indexer_error)?;
        let resp: Response = resp_value.dyn_into().map_err(indexer_error)?;

        if resp.status() != 200 {
            return Err(WasmStreamError::Indexer(format!("HTTP {}", resp.status())));
        }

        let body = JsFuture::from(resp.json().map_err(indexer_error)?)
            .await
            .map_err(indexer_error)?;
        serde_wasm_bindgen::from_value(body)
            .map_err(|e| WasmStreamError::Indexer(format!("Invalid response body: {}", e)))
    }
}
