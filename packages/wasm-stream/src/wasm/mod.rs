mod builder;
mod client;
mod connection;
mod constants;
mod indexer;
mod parser;
mod pubkey;
pub mod try_into_js_value;
mod wallet;

pub use builder::BuilderNamespace;
pub use client::WasmStreamClient;
pub use connection::JsConnection;
pub use indexer::FetchIndexer;
pub use parser::ParserNamespace;
pub use pubkey::WasmPubkey;
pub use wallet::JsWallet;

// Re-export constants functions
pub use constants::*;
