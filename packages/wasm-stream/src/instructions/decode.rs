//! Instruction decoding for stream transactions.

use super::stream::StreamInstruction;
use super::types::*;
use solana_system_interface::instruction::SystemInstruction;

const SYSTEM_PROGRAM_ID: &str = "11111111111111111111111111111111";

/// Context for decoding an instruction - provides account addresses.
pub struct InstructionContext<'a> {
    pub program_id: &'a str,
    pub accounts: &'a [String],
    pub data: &'a [u8],
}

/// Decode a single instruction into a ParsedInstruction.
///
/// `stream_program_id` is configurable, so it is matched at runtime rather
/// than as a pattern constant.
pub fn decode_instruction(ctx: InstructionContext, stream_program_id: &str) -> ParsedInstruction {
    if ctx.program_id == stream_program_id {
        decode_stream_instruction(ctx)
    } else if ctx.program_id == SYSTEM_PROGRAM_ID {
        decode_system_instruction(ctx)
    } else {
        make_unknown(ctx)
    }
}

// =============================================================================
// System Program Decoding
// =============================================================================

fn decode_system_instruction(ctx: InstructionContext) -> ParsedInstruction {
    let Ok(instr) = bincode::deserialize::<SystemInstruction>(ctx.data) else {
        return make_unknown(ctx);
    };

    match instr {
        SystemInstruction::CreateAccountWithSeed {
            base,
            seed,
            lamports,
            space,
            owner,
        } if ctx.accounts.len() >= 2 => {
            ParsedInstruction::CreateStreamAccount(CreateStreamAccountParams {
                from_address: ctx.accounts[0].clone(),
                stream_address: ctx.accounts[1].clone(),
                base_address: base.to_string(),
                seed,
                lamports,
                space,
                owner: owner.to_string(),
            })
        }
        _ => make_unknown(ctx),
    }
}

// =============================================================================
// Streaming Program Decoding
// =============================================================================

fn decode_stream_instruction(ctx: InstructionContext) -> ParsedInstruction {
    let Ok(instr) = StreamInstruction::unpack(ctx.data) else {
        return make_unknown(ctx);
    };

    match instr {
        StreamInstruction::CreateStream(input) if ctx.accounts.len() >= 4 => {
            ParsedInstruction::CreateStream(StreamCreateParams {
                stream_address: ctx.accounts[0].clone(),
                sender_address: ctx.accounts[1].clone(),
                receiver_address: ctx.accounts[2].clone(),
                admin_address: ctx.accounts[3].clone(),
                start_time: input.start_time,
                end_time: input.end_time,
                lamports_withdrawn: input.lamports_withdrawn,
                amount_second: input.amount_second,
            })
        }
        StreamInstruction::Withdraw(input) if ctx.accounts.len() >= 2 => {
            ParsedInstruction::Withdraw(StreamWithdrawParams {
                stream_address: ctx.accounts[0].clone(),
                receiver_address: ctx.accounts[1].clone(),
                amount: input.amount,
            })
        }
        StreamInstruction::Cancel if ctx.accounts.len() >= 3 => {
            ParsedInstruction::Cancel(StreamCancelParams {
                stream_address: ctx.accounts[0].clone(),
                sender_address: ctx.accounts[1].clone(),
                receiver_address: ctx.accounts[2].clone(),
            })
        }
        _ => make_unknown(ctx),
    }
}

fn make_unknown(ctx: InstructionContext) -> ParsedInstruction {
    ParsedInstruction::Unknown(UnknownInstructionParams {
        program_id: ctx.program_id.to_string(),
        accounts: ctx.accounts.to_vec(),
        data: ctx.data.to_vec(),
    })
}
