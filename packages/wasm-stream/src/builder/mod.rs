//! Stream transaction building.
//!
//! Pure functions: every chain-dependent value (blockhash, rent, seed) is
//! passed in, so the same code backs both the async actions and the
//! offline `BuilderNamespace`.

mod build;
mod funding;
mod types;

pub use build::{
    build_cancel, build_create_stream, build_withdraw, cancel_instruction,
    create_stream_account_instruction, create_stream_instruction, set_payer_and_blockhash,
    withdraw_instruction,
};
pub use funding::{stream_funding_lamports, streamed_total, ADMIN_FEE_MARGIN, STREAM_ACCOUNT_SPACE};
pub use types::{CreateStreamParams, PreparedCreateStream};
pub(crate) use types::deserialize_amount;
