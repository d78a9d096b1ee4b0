//! Streaming program instructions: encoding for the builders, decoding for
//! `parseTransaction`.

mod decode;
mod stream;
mod try_into_js_value;
mod types;

pub use stream::{
    CreateStreamInput, StreamInstruction, WithdrawInput, CANCEL_OPCODE, CREATE_STREAM_OPCODE,
    WITHDRAW_OPCODE,
};
pub(crate) use decode::{decode_instruction, InstructionContext};
pub use types::*;
