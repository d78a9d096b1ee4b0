//! Stream transaction assembly.
//!
//! Uses the Solana SDK for instruction and message construction. Account
//! lists below are positional: the program reads them in this order.

use crate::config::ProgramConfig;
use crate::error::WasmStreamError;
use crate::instructions::{CreateStreamInput, StreamInstruction, WithdrawInput};
use crate::pubkey::{Pubkey, PubkeyExt};

use super::funding::{stream_funding_lamports, STREAM_ACCOUNT_SPACE};
use super::types::{CreateStreamParams, PreparedCreateStream};

use solana_sdk::hash::Hash;
use solana_sdk::instruction::{AccountMeta, Instruction};
use solana_sdk::message::Message;
use solana_system_interface::instruction as system_ix;
use solana_transaction::Transaction;

/// Wrap instructions into an unsigned transaction paid for by `fee_payer`.
///
/// Instruction order is preserved; account creation has to come before
/// anything that touches the new account.
pub fn set_payer_and_blockhash(
    instructions: &[Instruction],
    fee_payer: &Pubkey,
    recent_blockhash: &Hash,
) -> Transaction {
    let message = Message::new_with_blockhash(instructions, Some(fee_payer), recent_blockhash);
    Transaction::new_unsigned(message)
}

/// System instruction that creates and funds the stream account at its
/// seed-derived address, owned by the streaming program.
pub fn create_stream_account_instruction(
    sender: &Pubkey,
    stream: &Pubkey,
    seed: &str,
    lamports: u64,
    program_id: &Pubkey,
) -> Instruction {
    system_ix::create_account_with_seed(
        sender,
        stream,
        sender,
        seed,
        lamports,
        STREAM_ACCOUNT_SPACE,
        program_id,
    )
}

/// Opcode 1. Accounts: [stream (w), sender (s), receiver, admin (w)]
pub fn create_stream_instruction(
    config: &ProgramConfig,
    stream: &Pubkey,
    sender: &Pubkey,
    input: &CreateStreamInput,
) -> Result<Instruction, WasmStreamError> {
    let data = StreamInstruction::CreateStream(*input).pack()?;
    Ok(Instruction::new_with_bytes(
        config.program_id,
        &data,
        vec![
            AccountMeta::new(*stream, false),
            AccountMeta::new_readonly(*sender, true),
            AccountMeta::new_readonly(input.receiver_pubkey(), false),
            AccountMeta::new(config.admin_account, false),
        ],
    ))
}

/// Opcode 2. Accounts: [stream (w), receiver (s)]
pub fn withdraw_instruction(
    config: &ProgramConfig,
    stream: &Pubkey,
    receiver: &Pubkey,
    amount: u64,
) -> Result<Instruction, WasmStreamError> {
    let data = StreamInstruction::Withdraw(WithdrawInput { amount }).pack()?;
    Ok(Instruction::new_with_bytes(
        config.program_id,
        &data,
        vec![
            AccountMeta::new(*stream, false),
            AccountMeta::new_readonly(*receiver, true),
        ],
    ))
}

/// Opcode 3. Accounts: [stream (w), sender (s, w), receiver (w)]
pub fn cancel_instruction(
    config: &ProgramConfig,
    stream: &Pubkey,
    sender: &Pubkey,
    receiver: &Pubkey,
) -> Result<Instruction, WasmStreamError> {
    let data = StreamInstruction::Cancel.pack()?;
    Ok(Instruction::new_with_bytes(
        config.program_id,
        &data,
        vec![
            AccountMeta::new(*stream, false),
            AccountMeta::new(*sender, true),
            AccountMeta::new(*receiver, false),
        ],
    ))
}

/// Build the two-instruction create-stream transaction.
///
/// `seed` must be fresh for every stream the sender opens; `rent_exempt_minimum`
/// is the chain's minimum balance for `STREAM_ACCOUNT_SPACE` bytes.
pub fn build_create_stream(
    config: &ProgramConfig,
    sender: &Pubkey,
    params: &CreateStreamParams,
    seed: &str,
    rent_exempt_minimum: u64,
    recent_blockhash: &Hash,
) -> Result<PreparedCreateStream, WasmStreamError> {
    let receiver = Pubkey::from_base58(&params.receiver_address).map_err(|_| {
        WasmStreamError::InvalidInput(format!(
            "Invalid receiverAddress: {}",
            params.receiver_address
        ))
    })?;

    let stream_address = Pubkey::derive_with_seed(sender, seed, &config.program_id)?;
    let lamports = stream_funding_lamports(
        params.start_time,
        params.end_time,
        params.amount_speed,
        rent_exempt_minimum,
    )?;

    let input = CreateStreamInput::new(
        params.start_time,
        params.end_time,
        &receiver,
        params.amount_speed,
    );

    let instructions = [
        create_stream_account_instruction(sender, &stream_address, seed, lamports, &config.program_id),
        create_stream_instruction(config, &stream_address, sender, &input)?,
    ];

    Ok(PreparedCreateStream {
        transaction: set_payer_and_blockhash(&instructions, sender, recent_blockhash),
        seed: seed.to_string(),
        stream_address,
        lamports,
    })
}

/// Build a withdraw transaction signed and paid for by the receiver.
pub fn build_withdraw(
    config: &ProgramConfig,
    receiver: &Pubkey,
    stream: &Pubkey,
    amount: u64,
    recent_blockhash: &Hash,
) -> Result<Transaction, WasmStreamError> {
    let ix = withdraw_instruction(config, stream, receiver, amount)?;
    Ok(set_payer_and_blockhash(&[ix], receiver, recent_blockhash))
}

/// Build a cancel transaction signed and paid for by the sender.
pub fn build_cancel(
    config: &ProgramConfig,
    sender: &Pubkey,
    stream: &Pubkey,
    receiver: &Pubkey,
    recent_blockhash: &Hash,
) -> Result<Transaction, WasmStreamError> {
    let ix = cancel_instruction(config, stream, sender, receiver)?;
    Ok(set_payer_and_blockhash(&[ix], sender, recent_blockhash))
}
