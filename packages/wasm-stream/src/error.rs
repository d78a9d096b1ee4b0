use wasm_bindgen::prelude::*;

/// Every failure the stream actions can hit.
///
/// The variants only say where a failure came from. Callers see one flat
/// failure per operation; the message is carried along for display.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WasmStreamError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Encoding error: {0}")]
    Encoding(String),

    #[error("RPC error: {0}")]
    Rpc(String),

    #[error("Wallet error: {0}")]
    Wallet(String),

    #[error("Indexer error: {0}")]
    Indexer(String),

    #[error("{0}")]
    Js(String),
}

impl WasmStreamError {
    pub fn invalid_input(s: &str) -> WasmStreamError {
        WasmStreamError::InvalidInput(s.to_string())
    }
}

impl From<&str> for WasmStreamError {
    fn from(s: &str) -> Self {
        WasmStreamError::Js(s.to_string())
    }
}

impl From<String> for WasmStreamError {
    fn from(s: String) -> Self {
        WasmStreamError::Js(s)
    }
}

impl From<JsValue> for WasmStreamError {
    fn from(value: JsValue) -> Self {
        // Thrown values are usually Error objects; fall back to the debug form otherwise
        let message = value
            .dyn_ref::<js_sys::Error>()
            .map(|e| String::from(e.message()))
            .or_else(|| value.as_string())
            .unwrap_or_else(|| format!("{:?}", value));
        WasmStreamError::Js(message)
    }
}

// Required for wasm_bindgen to convert errors to JavaScript exceptions
// Uses js_sys::Error to create a proper JavaScript Error with stack trace
impl From<WasmStreamError> for JsValue {
    fn from(err: WasmStreamError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}
