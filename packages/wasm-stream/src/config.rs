//! Session configuration.
//!
//! `StreamConfig` is what JavaScript hands in (all strings, all optional);
//! `ProgramConfig` is the parsed form the builders work with.

use crate::error::WasmStreamError;
use crate::pubkey::{Pubkey, PubkeyExt};
use serde::Deserialize;

pub const DEFAULT_PROGRAM_ID: &str = "3MWn8G9eHvHXRpdb9fBduDpD5XD4SLbgxkbBwe2s9G8Q";
pub const DEFAULT_ADMIN_ACCOUNT: &str = "6wTtu65bS4FkANr2DeuRvbWQ7BsefwSaP5pF2MFTK62P";
pub const DEFAULT_CLUSTER_URL: &str = "https://api.devnet.solana.com";
pub const DEFAULT_COMMITMENT: &str = "confirmed";
pub const DEFAULT_INDEXER_URL: &str = "http://localhost:8080";
pub const DEFAULT_SEED_PREFIX: &str = "abcdef";

const COMMITMENT_LEVELS: [&str; 3] = ["processed", "confirmed", "finalized"];

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StreamConfig {
    /// Streaming program address (base58)
    pub program_id: String,
    /// Account receiving the admin fee cut (base58)
    pub admin_account: String,
    /// RPC endpoint the JS connection points at; informational only
    pub cluster_url: String,
    /// Commitment level used when confirming
    pub commitment: String,
    /// Base URL of the stream indexer
    pub indexer_url: String,
    /// Prefix for generated account seeds
    pub seed_prefix: String,
}

impl Default for StreamConfig {
    fn default() -> Self {
        StreamConfig {
            program_id: DEFAULT_PROGRAM_ID.to_string(),
            admin_account: DEFAULT_ADMIN_ACCOUNT.to_string(),
            cluster_url: DEFAULT_CLUSTER_URL.to_string(),
            commitment: DEFAULT_COMMITMENT.to_string(),
            indexer_url: DEFAULT_INDEXER_URL.to_string(),
            seed_prefix: DEFAULT_SEED_PREFIX.to_string(),
        }
    }
}

impl StreamConfig {
    /// Parse and validate every field once for the session.
    pub fn resolve(&self) -> Result<ProgramConfig, WasmStreamError> {
        let program_id = Pubkey::from_base58(&self.program_id).map_err(|_| {
            WasmStreamError::InvalidInput(format!("Invalid programId: {}", self.program_id))
        })?;
        let admin_account = Pubkey::from_base58(&self.admin_account).map_err(|_| {
            WasmStreamError::InvalidInput(format!("Invalid adminAccount: {}", self.admin_account))
        })?;

        if !COMMITMENT_LEVELS.contains(&self.commitment.as_str()) {
            return Err(WasmStreamError::InvalidInput(format!(
                "Invalid commitment: {} (expected one of {})",
                self.commitment,
                COMMITMENT_LEVELS.join(", ")
            )));
        }

        if self.indexer_url.is_empty() {
            return Err(WasmStreamError::invalid_input("indexerUrl must not be empty"));
        }

        Ok(ProgramConfig {
            program_id,
            admin_account,
            cluster_url: self.cluster_url.clone(),
            commitment: self.commitment.clone(),
            indexer_url: self.indexer_url.trim_end_matches('/').to_string(),
            seed_prefix: self.seed_prefix.clone(),
        })
    }
}

/// Validated configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramConfig {
    pub program_id: Pubkey,
    pub admin_account: Pubkey,
    pub cluster_url: String,
    pub commitment: String,
    pub indexer_url: String,
    pub seed_prefix: String,
}

impl ProgramConfig {
    /// Indexer endpoint listing the streams of `wallet_address`.
    pub fn streams_url(&self, wallet_address: &str) -> String {
        format!("{}/{}", self.indexer_url, wallet_address)
    }
}
