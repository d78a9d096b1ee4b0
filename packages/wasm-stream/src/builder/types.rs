//! Types for stream transaction building.
//!
//! Request types are deserialized from JavaScript via serde. Amounts accept
//! either numbers or decimal strings so BigInt values survive the trip.

use serde::Deserialize;
use solana_transaction::Transaction;

use crate::pubkey::Pubkey;

/// Parameters for opening a stream.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateStreamParams {
    /// Receiver wallet (base58)
    pub receiver_address: String,
    /// Unix seconds
    #[serde(deserialize_with = "deserialize_amount")]
    pub start_time: u64,
    /// Unix seconds
    #[serde(deserialize_with = "deserialize_amount")]
    pub end_time: u64,
    /// Lamports per second
    #[serde(deserialize_with = "deserialize_amount")]
    pub amount_speed: u64,
}

/// A create-stream transaction ready for the wallet, with everything the
/// caller needs to track the new account.
#[derive(Debug, Clone)]
pub struct PreparedCreateStream {
    pub transaction: Transaction,
    /// Seed the stream address was derived from
    pub seed: String,
    /// Address of the new stream account
    pub stream_address: Pubkey,
    /// Lamports moved into the stream account
    pub lamports: u64,
}

/// Deserialize amount from either string or number (for JS BigInt compatibility)
pub(crate) fn deserialize_amount<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Amount {
        Number(u64),
        Float(f64),
        Text(String),
    }

    match Amount::deserialize(deserializer)? {
        Amount::Number(n) => Ok(n),
        Amount::Float(f) if f >= 0.0 && f.fract() == 0.0 && f < u64::MAX as f64 => Ok(f as u64),
        Amount::Float(f) => Err(serde::de::Error::custom(format!(
            "Amount must be a non-negative integer, got {}",
            f
        ))),
        Amount::Text(s) => s
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("Invalid amount: {}", s))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_from_numbers() {
        let params: CreateStreamParams = serde_json::from_str(
            r#"{
                "receiverAddress": "FKjSjCqByQRwSzZoMXA7bKnDbJe41YgJTHFFzBeC42bH",
                "startTime": 1700000000,
                "endTime": 1700000100,
                "amountSpeed": 10
            }"#,
        )
        .unwrap();
        assert_eq!(params.start_time, 1_700_000_000);
        assert_eq!(params.amount_speed, 10);
    }

    #[test]
    fn test_params_from_strings() {
        let params: CreateStreamParams = serde_json::from_str(
            r#"{
                "receiverAddress": "FKjSjCqByQRwSzZoMXA7bKnDbJe41YgJTHFFzBeC42bH",
                "startTime": "0",
                "endTime": "18446744073709551615",
                "amountSpeed": "1"
            }"#,
        )
        .unwrap();
        assert_eq!(params.end_time, u64::MAX);
    }

    #[test]
    fn test_params_reject_negative() {
        let result: Result<CreateStreamParams, _> = serde_json::from_str(
            r#"{
                "receiverAddress": "FKjSjCqByQRwSzZoMXA7bKnDbJe41YgJTHFFzBeC42bH",
                "startTime": -5,
                "endTime": 10,
                "amountSpeed": 1
            }"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_params_reject_out_of_range() {
        // 2^64 arrives as a float; casting would clamp it to u64::MAX
        let result: Result<CreateStreamParams, _> = serde_json::from_str(
            r#"{
                "receiverAddress": "FKjSjCqByQRwSzZoMXA7bKnDbJe41YgJTHFFzBeC42bH",
                "startTime": 0,
                "endTime": 18446744073709551616,
                "amountSpeed": 1
            }"#,
        );
        assert!(result.is_err());
    }
}
