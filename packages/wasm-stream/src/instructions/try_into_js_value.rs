//! TryIntoJsValue implementations for instruction types.
//!
//! Converts parsed instructions directly to JavaScript objects with
//! BigInt handling for u64 amounts.

use crate::js_obj;
use crate::wasm::try_into_js_value::{JsConversionError, TryIntoJsValue};
use base64::prelude::*;
use wasm_bindgen::JsValue;

use super::types::*;

impl TryIntoJsValue for CreateStreamAccountParams {
    fn try_to_js_value(&self) -> Result<JsValue, JsConversionError> {
        js_obj!(
            "type" => "CreateStreamAccount",
            "fromAddress" => self.from_address,
            "streamAddress" => self.stream_address,
            "baseAddress" => self.base_address,
            "seed" => self.seed,
            "lamports" => self.lamports,
            "space" => self.space,
            "owner" => self.owner
        )
    }
}

impl TryIntoJsValue for StreamCreateParams {
    fn try_to_js_value(&self) -> Result<JsValue, JsConversionError> {
        js_obj!(
            "type" => "CreateStream",
            "streamAddress" => self.stream_address,
            "senderAddress" => self.sender_address,
            "receiverAddress" => self.receiver_address,
            "adminAddress" => self.admin_address,
            "startTime" => self.start_time,
            "endTime" => self.end_time,
            "lamportsWithdrawn" => self.lamports_withdrawn,
            "amountSecond" => self.amount_second
        )
    }
}

impl TryIntoJsValue for StreamWithdrawParams {
    fn try_to_js_value(&self) -> Result<JsValue, JsConversionError> {
        js_obj!(
            "type" => "Withdraw",
            "streamAddress" => self.stream_address,
            "receiverAddress" => self.receiver_address,
            "amount" => self.amount
        )
    }
}

impl TryIntoJsValue for StreamCancelParams {
    fn try_to_js_value(&self) -> Result<JsValue, JsConversionError> {
        js_obj!(
            "type" => "Cancel",
            "streamAddress" => self.stream_address,
            "senderAddress" => self.sender_address,
            "receiverAddress" => self.receiver_address
        )
    }
}

impl TryIntoJsValue for UnknownInstructionParams {
    fn try_to_js_value(&self) -> Result<JsValue, JsConversionError> {
        js_obj!(
            "type" => "Unknown",
            "programId" => self.program_id,
            "accounts" => self.accounts,
            "data" => BASE64_STANDARD.encode(&self.data)
        )
    }
}

impl TryIntoJsValue for ParsedInstruction {
    fn try_to_js_value(&self) -> Result<JsValue, JsConversionError> {
        match self {
            ParsedInstruction::CreateStreamAccount(p) => p.try_to_js_value(),
            ParsedInstruction::CreateStream(p) => p.try_to_js_value(),
            ParsedInstruction::Withdraw(p) => p.try_to_js_value(),
            ParsedInstruction::Cancel(p) => p.try_to_js_value(),
            ParsedInstruction::Unknown(p) => p.try_to_js_value(),
        }
    }
}
