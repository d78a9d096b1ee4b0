//! The four stream actions.
//!
//! Each action runs to exactly one terminal `StreamEvent`. Errors from any
//! step (input parsing, rent query, blockhash, wallet, confirmation) end
//! the action in its failure event; nothing is retried or rolled back.

use serde::Serialize;
use serde_json::json;

use crate::builder::{
    build_cancel, build_create_stream, build_withdraw, CreateStreamParams, STREAM_ACCOUNT_SPACE,
};
use crate::client::{ChainConnection, StreamIndexer, WalletSigner};
use crate::config::ProgramConfig;
use crate::error::WasmStreamError;
use crate::pubkey::{Pubkey, PubkeyExt};
use crate::seed::generate_seed;
use crate::{console_error, console_log};
use solana_transaction::Transaction;

/// Terminal outcome of an action, shaped like the store actions the UI
/// consumes: `{ type, result, ... }`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StreamEvent {
    CreateResponse { result: bool, id: String },
    CreateFailed { result: bool, error: String },
    WithdrawSuccess { result: bool },
    WithdrawFailed { result: bool, error: String },
    CancelSuccess { result: bool },
    CancelFailed { result: bool, error: String },
    DataReceived { result: serde_json::Value },
    DataNotReceived { result: serde_json::Value, error: String },
}

impl StreamEvent {
    fn create_failed(err: &WasmStreamError) -> Self {
        StreamEvent::CreateFailed {
            result: false,
            error: err.to_string(),
        }
    }

    fn withdraw_failed(err: &WasmStreamError) -> Self {
        StreamEvent::WithdrawFailed {
            result: false,
            error: err.to_string(),
        }
    }

    fn cancel_failed(err: &WasmStreamError) -> Self {
        StreamEvent::CancelFailed {
            result: false,
            error: err.to_string(),
        }
    }

    fn data_not_received(err: &WasmStreamError) -> Self {
        StreamEvent::DataNotReceived {
            result: json!({ "data": null }),
            error: err.to_string(),
        }
    }

    /// The `type` tag, e.g. `"CREATE_RESPONSE"`.
    pub fn kind(&self) -> &'static str {
        match self {
            StreamEvent::CreateResponse { .. } => "CREATE_RESPONSE",
            StreamEvent::CreateFailed { .. } => "CREATE_FAILED",
            StreamEvent::WithdrawSuccess { .. } => "WITHDRAW_SUCCESS",
            StreamEvent::WithdrawFailed { .. } => "WITHDRAW_FAILED",
            StreamEvent::CancelSuccess { .. } => "CANCEL_SUCCESS",
            StreamEvent::CancelFailed { .. } => "CANCEL_FAILED",
            StreamEvent::DataReceived { .. } => "DATA_RECEIVED",
            StreamEvent::DataNotReceived { .. } => "DATA_NOT_RECEIVED",
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(
            self,
            StreamEvent::CreateResponse { .. }
                | StreamEvent::WithdrawSuccess { .. }
                | StreamEvent::CancelSuccess { .. }
                | StreamEvent::DataReceived { .. }
        )
    }

    /// Failure message, if this is a failure event.
    pub fn error(&self) -> Option<&str> {
        match self {
            StreamEvent::CreateFailed { error, .. }
            | StreamEvent::WithdrawFailed { error, .. }
            | StreamEvent::CancelFailed { error, .. }
            | StreamEvent::DataNotReceived { error, .. } => Some(error),
            _ => None,
        }
    }
}

/// Builds, submits and confirms stream transactions for one session.
pub struct StreamClient<C, I> {
    config: ProgramConfig,
    connection: C,
    indexer: I,
}

impl<C: ChainConnection, I: StreamIndexer> StreamClient<C, I> {
    pub fn new(config: ProgramConfig, connection: C, indexer: I) -> Self {
        StreamClient {
            config,
            connection,
            indexer,
        }
    }

    pub fn config(&self) -> &ProgramConfig {
        &self.config
    }

    pub fn connection(&self) -> &C {
        &self.connection
    }

    /// Open a stream from the wallet to `params.receiver_address`.
    ///
    /// On success the event carries the new stream account address.
    pub async fn create_stream<W: WalletSigner>(
        &self,
        params: &CreateStreamParams,
        wallet: &W,
    ) -> StreamEvent {
        match self.try_create_stream(params, wallet).await {
            Ok(stream_address) => StreamEvent::CreateResponse {
                result: true,
                id: stream_address.to_string(),
            },
            Err(e) => {
                console_error!("createStream failed: {}", e);
                StreamEvent::create_failed(&e)
            }
        }
    }

    /// Withdraw `amount` lamports from `stream_id` to the wallet.
    pub async fn withdraw<W: WalletSigner>(&self, stream_id: &str, amount: u64, wallet: &W) -> StreamEvent {
        match self.try_withdraw(stream_id, amount, wallet).await {
            Ok(()) => StreamEvent::WithdrawSuccess { result: true },
            Err(e) => {
                console_error!("withdraw failed: {}", e);
                StreamEvent::withdraw_failed(&e)
            }
        }
    }

    /// Cancel `stream_id`, settling with `receiver_address`.
    pub async fn cancel_stream<W: WalletSigner>(
        &self,
        stream_id: &str,
        receiver_address: &str,
        wallet: &W,
    ) -> StreamEvent {
        match self.try_cancel(stream_id, receiver_address, wallet).await {
            Ok(()) => StreamEvent::CancelSuccess { result: true },
            Err(e) => {
                console_error!("cancelStream failed: {}", e);
                StreamEvent::cancel_failed(&e)
            }
        }
    }

    /// Fetch every stream the indexer knows for `wallet_address`.
    pub async fn get_all_streams(&self, wallet_address: &str) -> StreamEvent {
        match self.indexer.get_streams(wallet_address).await {
            Ok(data) => StreamEvent::DataReceived { result: data },
            Err(e) => {
                console_error!("getAllStreams failed: {}", e);
                StreamEvent::data_not_received(&e)
            }
        }
    }

    async fn try_create_stream<W: WalletSigner>(
        &self,
        params: &CreateStreamParams,
        wallet: &W,
    ) -> Result<Pubkey, WasmStreamError> {
        let sender = wallet.public_key()?;
        let seed = generate_seed(&self.config.seed_prefix);

        let rent = self
            .connection
            .minimum_balance_for_rent_exemption(STREAM_ACCOUNT_SPACE)
            .await?;
        let blockhash = self.connection.latest_blockhash().await?;

        let prepared = build_create_stream(&self.config, &sender, params, &seed, rent, &blockhash)?;
        console_log!(
            "createStream: {} lamports into {}",
            prepared.lamports,
            prepared.stream_address
        );

        self.submit(&prepared.transaction, wallet).await?;
        Ok(prepared.stream_address)
    }

    async fn try_withdraw<W: WalletSigner>(
        &self,
        stream_id: &str,
        amount: u64,
        wallet: &W,
    ) -> Result<(), WasmStreamError> {
        let stream = parse_address("streamId", stream_id)?;
        let receiver = wallet.public_key()?;
        let blockhash = self.connection.latest_blockhash().await?;

        let tx = build_withdraw(&self.config, &receiver, &stream, amount, &blockhash)?;
        self.submit(&tx, wallet).await
    }

    async fn try_cancel<W: WalletSigner>(
        &self,
        stream_id: &str,
        receiver_address: &str,
        wallet: &W,
    ) -> Result<(), WasmStreamError> {
        let stream = parse_address("streamId", stream_id)?;
        let receiver = parse_address("receiverAddress", receiver_address)?;
        let sender = wallet.public_key()?;
        let blockhash = self.connection.latest_blockhash().await?;

        let tx = build_cancel(&self.config, &sender, &stream, &receiver, &blockhash)?;
        self.submit(&tx, wallet).await
    }

    /// Hand the transaction to the wallet and wait for confirmation.
    async fn submit<W: WalletSigner>(&self, tx: &Transaction, wallet: &W) -> Result<(), WasmStreamError> {
        let signature = wallet.send_transaction(tx).await?;
        self.connection.confirm_transaction(&signature).await?;
        console_log!("end sendMessage {}", signature);
        Ok(())
    }
}

fn parse_address(field: &str, value: &str) -> Result<Pubkey, WasmStreamError> {
    Pubkey::from_base58(value)
        .map_err(|_| WasmStreamError::InvalidInput(format!("Invalid {}: {}", field, value)))
}
