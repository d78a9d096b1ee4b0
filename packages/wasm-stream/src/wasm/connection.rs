//! `ChainConnection` backed by a web3.js-style `Connection` object.
//!
//! Only three methods are used:
//! - `getMinimumBalanceForRentExemption(space, commitment) -> Promise<number>`
//! - `getLatestBlockhash(commitment) -> Promise<{ blockhash }>`
//! - `confirmTransaction(signature, commitment) -> Promise<{ value: { err } }>`

use crate::client::ChainConnection;
use crate::error::WasmStreamError;
use solana_sdk::hash::Hash;
use solana_sdk::signature::Signature;
use std::str::FromStr;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

/// Call `target[name](...args)` and await the result if it is a promise.
pub(crate) async fn call_method(
    target: &JsValue,
    name: &str,
    args: &[JsValue],
) -> Result<JsValue, WasmStreamError> {
    let method = js_sys::Reflect::get(target, &JsValue::from_str(name))?;
    let func: js_sys::Function = method
        .dyn_into()
        .map_err(|_| WasmStreamError::Js(format!("{} is not a function", name)))?;

    let args: js_sys::Array = args.iter().collect();
    let returned = func.apply(target, &args)?;

    // Promise.resolve passes promises through and wraps plain values
    Ok(JsFuture::from(js_sys::Promise::resolve(&returned)).await?)
}

/// Read a property, failing if it is missing.
pub(crate) fn get_property(target: &JsValue, name: &str) -> Result<JsValue, WasmStreamError> {
    let value = js_sys::Reflect::get(target, &JsValue::from_str(name))?;
    if value.is_undefined() || value.is_null() {
        return Err(WasmStreamError::Js(format!("Missing property: {}", name)));
    }
    Ok(value)
}

#[derive(Debug, Clone)]
pub struct JsConnection {
    inner: JsValue,
    commitment: String,
}

impl JsConnection {
    pub fn new(inner: JsValue, commitment: &str) -> Self {
        JsConnection {
            inner,
            commitment: commitment.to_string(),
        }
    }

    pub fn inner(&self) -> &JsValue {
        &self.inner
    }

    fn commitment(&self) -> JsValue {
        JsValue::from_str(&self.commitment)
    }
}

impl ChainConnection for JsConnection {
    async fn minimum_balance_for_rent_exemption(&self, space: u64) -> Result<u64, WasmStreamError> {
        let value = call_method(
            &self.inner,
            "getMinimumBalanceForRentExemption",
            &[JsValue::from_f64(space as f64), self.commitment()],
        )
        .await
        .map_err(|e| WasmStreamError::Rpc(format!("getMinimumBalanceForRentExemption: {}", e)))?;

        value
            .as_f64()
            .filter(|v| *v >= 0.0 && v.fract() == 0.0)
            .map(|v| v as u64)
            .ok_or_else(|| WasmStreamError::Rpc(format!("Unexpected rent value: {:?}", value)))
    }

    async fn latest_blockhash(&self) -> Result<Hash, WasmStreamError> {
        let value = call_method(&self.inner, "getLatestBlockhash", &[self.commitment()])
            .await
            .map_err(|e| WasmStreamError::Rpc(format!("getLatestBlockhash: {}", e)))?;

        let blockhash = get_property(&value, "blockhash")?
            .as_string()
            .ok_or_else(|| WasmStreamError::Rpc("blockhash is not a string".to_string()))?;

        Hash::from_str(&blockhash)
            .map_err(|e| WasmStreamError::Rpc(format!("Invalid blockhash {}: {}", blockhash, e)))
    }

    async fn confirm_transaction(&self, signature: &Signature) -> Result<(), WasmStreamError> {
        let value = call_method(
            &self.inner,
            "confirmTransaction",
            &[JsValue::from_str(&signature.to_string()), self.commitment()],
        )
        .await
        .map_err(|e| WasmStreamError::Rpc(format!("confirmTransaction: {}", e)))?;

        // { context, value: { err } }; a non-null err means the program rejected it
        let err = js_sys::Reflect::get(&value, &JsValue::from_str("value"))
            .and_then(|v| js_sys::Reflect::get(&v, &JsValue::from_str("err")))
            .unwrap_or(JsValue::NULL);
        if err.is_undefined() || err.is_null() {
            Ok(())
        } else {
            let detail = js_sys::JSON::stringify(&err)
                .ok()
                .and_then(|s| s.as_string())
                .unwrap_or_else(|| format!("{:?}", err));
            Err(WasmStreamError::Rpc(format!(
                "Transaction {} failed: {}",
                signature, detail
            )))
        }
    }
}
