//! wasm-stream: WASM client for a Solana lamport streaming program.
//!
//! A sender locks `(end - start) * rate` lamports (plus an admin fee margin
//! and rent) in a fresh account derived with `createAccountWithSeed`; the
//! receiver withdraws as time passes and the sender can cancel.
//!
//! # Architecture
//!
//! The crate follows a two-layer architecture:
//!
//! 1. **Core** (`builder`, `instructions`, `actions`, ...) - Pure Rust on top of the
//!    Solana SDK. Chain, wallet and indexer access go through the traits in `client`.
//! 2. **WASM bindings** (`wasm/`) - JS-backed implementations of those traits and
//!    thin wrappers that expose the core to JavaScript
//!
//! # Usage from Rust
//!
//! ```rust
//! use wasm_stream::{Pubkey, PubkeyExt, StreamConfig, StreamInstruction, WithdrawInput};
//!
//! let config = StreamConfig::default().resolve().unwrap();
//! let wallet = Pubkey::from_base58("DgT9qyYwYKBRDyDw3EfR12LHQCQjtNrKu2qMsXHuosmB").unwrap();
//! let stream = Pubkey::derive_with_seed(&wallet, "abcdef0", &config.program_id).unwrap();
//!
//! let data = StreamInstruction::Withdraw(WithdrawInput { amount: 500 }).pack().unwrap();
//! assert_eq!(data[0], 2);
//! # let _ = stream;
//! ```

pub mod actions;
pub mod builder;
pub mod client;
pub mod config;
#[doc(hidden)]
pub mod console;
mod error;
pub mod instructions;
mod parser;
pub mod pubkey;
pub mod seed;
pub mod state;
pub mod transaction;
pub mod wasm;

// Re-export core types at crate root
pub use actions::{StreamClient, StreamEvent};
pub use builder::{CreateStreamParams, PreparedCreateStream};
pub use client::{ChainConnection, StreamIndexer, WalletSigner};
pub use config::{ProgramConfig, StreamConfig};
pub use error::WasmStreamError;
pub use instructions::{CreateStreamInput, StreamInstruction, WithdrawInput};
pub use parser::{parse_transaction, ParsedTransaction};
pub use pubkey::{Pubkey, PubkeyExt};
pub use state::StreamState;
pub use transaction::{Transaction, TransactionExt};

// Re-export WASM types
pub use wasm::{BuilderNamespace, ParserNamespace, WasmPubkey, WasmStreamClient};
