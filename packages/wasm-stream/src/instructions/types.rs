//! Parsed instruction types.
//!
//! Account addresses are resolved to base58 strings so the values convert
//! straight to JavaScript objects via TryIntoJsValue.

/// A parsed instruction with type discriminant and params.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedInstruction {
    /// System `CreateAccountWithSeed` that opens the stream account
    CreateStreamAccount(CreateStreamAccountParams),

    // Streaming program
    CreateStream(StreamCreateParams),
    Withdraw(StreamWithdrawParams),
    Cancel(StreamCancelParams),

    // Fallback for anything else
    Unknown(UnknownInstructionParams),
}

// =============================================================================
// System Program Params
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateStreamAccountParams {
    pub from_address: String,
    pub stream_address: String,
    pub base_address: String,
    pub seed: String,
    pub lamports: u64,
    pub space: u64,
    pub owner: String,
}

// =============================================================================
// Streaming Program Params
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamCreateParams {
    pub stream_address: String,
    pub sender_address: String,
    pub receiver_address: String,
    pub admin_address: String,
    pub start_time: u64,
    pub end_time: u64,
    pub lamports_withdrawn: u64,
    pub amount_second: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamWithdrawParams {
    pub stream_address: String,
    pub receiver_address: String,
    pub amount: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamCancelParams {
    pub stream_address: String,
    pub sender_address: String,
    pub receiver_address: String,
}

// =============================================================================
// Unknown
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownInstructionParams {
    pub program_id: String,
    pub accounts: Vec<String>,
    pub data: Vec<u8>,
}
