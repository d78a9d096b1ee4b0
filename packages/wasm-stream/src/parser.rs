//! High-level transaction parser.
//!
//! Deserializes a legacy transaction and decodes every instruction, so a UI
//! can show what a stream transaction does before the wallet signs it.

use crate::error::WasmStreamError;
use crate::instructions::{decode_instruction, InstructionContext, ParsedInstruction};
use crate::js_obj;
use crate::transaction::{Transaction, TransactionExt};
use crate::wasm::try_into_js_value::{JsConversionError, TryIntoJsValue};
use wasm_bindgen::JsValue;

/// A fully parsed stream transaction.
#[derive(Debug, Clone)]
pub struct ParsedTransaction {
    /// The fee payer address (base58).
    pub fee_payer: String,

    /// Number of required signatures.
    pub num_signatures: u8,

    /// The recent blockhash (base58).
    pub recent_blockhash: String,

    /// All decoded instructions, in transaction order.
    pub instructions_data: Vec<ParsedInstruction>,

    /// All account keys (base58 strings).
    pub account_keys: Vec<String>,

    /// Signatures (base58). Unsigned placeholder slots are empty strings.
    pub signatures: Vec<String>,
}

impl TryIntoJsValue for ParsedTransaction {
    fn try_to_js_value(&self) -> Result<JsValue, JsConversionError> {
        js_obj!(
            "feePayer" => self.fee_payer,
            "numSignatures" => self.num_signatures,
            "recentBlockhash" => self.recent_blockhash,
            "instructionsData" => self.instructions_data,
            "accountKeys" => self.account_keys,
            "signatures" => self.signatures
        )
    }
}

/// Parse a serialized transaction.
///
/// Instructions addressed to `stream_program_id` decode to stream types;
/// everything else falls back to `Unknown`.
pub fn parse_transaction(
    bytes: &[u8],
    stream_program_id: &str,
) -> Result<ParsedTransaction, WasmStreamError> {
    let tx = Transaction::from_bytes(bytes)?;
    let msg = &tx.message;

    let account_keys: Vec<String> = msg.account_keys.iter().map(|k| k.to_string()).collect();

    let fee_payer = account_keys
        .first()
        .cloned()
        .ok_or_else(|| WasmStreamError::Encoding("Transaction has no account keys".to_string()))?;

    let mut instructions_data = Vec::with_capacity(msg.instructions.len());
    for (idx, instruction) in msg.instructions.iter().enumerate() {
        let program_id = account_keys
            .get(instruction.program_id_index as usize)
            .ok_or_else(|| {
                WasmStreamError::Encoding(format!("Invalid program_id_index in instruction {}", idx))
            })?;

        let accounts: Vec<String> = instruction
            .accounts
            .iter()
            .filter_map(|&i| account_keys.get(i as usize).cloned())
            .collect();

        let ctx = InstructionContext {
            program_id,
            accounts: &accounts,
            data: &instruction.data,
        };
        instructions_data.push(decode_instruction(ctx, stream_program_id));
    }

    let signatures = tx
        .signatures
        .iter()
        .map(|s| {
            let bytes: &[u8] = s.as_ref();
            if bytes.iter().all(|&b| b == 0) {
                String::new()
            } else {
                s.to_string()
            }
        })
        .collect();

    Ok(ParsedTransaction {
        fee_payer,
        num_signatures: msg.header.num_required_signatures,
        recent_blockhash: msg.recent_blockhash.to_string(),
        instructions_data,
        account_keys,
        signatures,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{build_create_stream, build_withdraw, CreateStreamParams};
    use crate::config::StreamConfig;
    use crate::pubkey::{Pubkey, PubkeyExt};
    use solana_sdk::hash::Hash;

    const SENDER: &str = "DgT9qyYwYKBRDyDw3EfR12LHQCQjtNrKu2qMsXHuosmB";
    const RECEIVER: &str = "FKjSjCqByQRwSzZoMXA7bKnDbJe41YgJTHFFzBeC42bH";

    #[test]
    fn test_parse_create_stream_transaction() {
        let config = StreamConfig::default().resolve().unwrap();
        let sender = Pubkey::from_base58(SENDER).unwrap();
        let params = CreateStreamParams {
            receiver_address: RECEIVER.to_string(),
            start_time: 1_000,
            end_time: 1_100,
            amount_speed: 5,
        };
        let prepared = build_create_stream(
            &config,
            &sender,
            &params,
            "abcdefXYZ",
            890_880,
            &Hash::new_from_array([9u8; 32]),
        )
        .unwrap();
        let bytes = prepared.transaction.to_bytes().unwrap();

        let parsed = parse_transaction(&bytes, &config.program_id.to_string()).unwrap();
        assert_eq!(parsed.fee_payer, SENDER);
        assert_eq!(parsed.num_signatures, 1);
        assert_eq!(parsed.signatures, vec![String::new()]);
        assert_eq!(parsed.instructions_data.len(), 2);

        match &parsed.instructions_data[0] {
            ParsedInstruction::CreateStreamAccount(p) => {
                assert_eq!(p.from_address, SENDER);
                assert_eq!(p.base_address, SENDER);
                assert_eq!(p.stream_address, prepared.stream_address.to_string());
                assert_eq!(p.seed, "abcdefXYZ");
                assert_eq!(p.lamports, 500 + 300_000 + 890_880);
                assert_eq!(p.space, 96);
                assert_eq!(p.owner, config.program_id.to_string());
            }
            other => panic!("Expected CreateStreamAccount, got {:?}", other),
        }

        match &parsed.instructions_data[1] {
            ParsedInstruction::CreateStream(p) => {
                assert_eq!(p.stream_address, prepared.stream_address.to_string());
                assert_eq!(p.sender_address, SENDER);
                assert_eq!(p.receiver_address, RECEIVER);
                assert_eq!(p.admin_address, config.admin_account.to_string());
                assert_eq!(p.start_time, 1_000);
                assert_eq!(p.end_time, 1_100);
                assert_eq!(p.lamports_withdrawn, 0);
                assert_eq!(p.amount_second, 5);
            }
            other => panic!("Expected CreateStream, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_with_other_program_id() {
        let config = StreamConfig::default().resolve().unwrap();
        let receiver = Pubkey::from_base58(RECEIVER).unwrap();
        let stream = Pubkey::from_base58(SENDER).unwrap();
        let tx = build_withdraw(&config, &receiver, &stream, 7, &Hash::default()).unwrap();

        let parsed = parse_transaction(&tx.to_bytes().unwrap(), "11111111111111111111111111111112").unwrap();
        assert!(matches!(
            parsed.instructions_data[0],
            ParsedInstruction::Unknown(_)
        ));
    }

    #[test]
    fn test_parse_invalid_bytes() {
        assert!(parse_transaction(&[0, 1, 2, 3], "x").is_err());
    }
}
