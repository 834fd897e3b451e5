use base64::{engine::general_purpose::STANDARD, Engine};
use solana_program::{instruction::Instruction, pubkey::Pubkey};
use solana_sdk::{hash::Hash, transaction::Transaction};

use crate::ActionError;

/// Transaction paid for by `fee_payer` with an empty signature slot for each
/// required signer.
pub fn build_unsigned(
    instructions: &[Instruction],
    fee_payer: &Pubkey,
    recent_blockhash: Hash,
) -> Transaction {
    let mut tx = Transaction::new_with_payer(instructions, Some(fee_payer));
    tx.message.recent_blockhash = recent_blockhash;
    tx
}

/// Wire-encode without checking signatures, then base64 for transport
pub fn encode(tx: &Transaction) -> Result<String, ActionError> {
    let bytes = bincode::serialize(tx)?;
    Ok(STANDARD.encode(bytes))
}
