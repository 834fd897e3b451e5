use bytemuck::{Pod, Zeroable};
use solana_program::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    system_program,
};

use crate::{DerivedAddresses, EscrowParams};

/// Instruction data of the escrow program's `take`. Anchor prefixes every
/// instruction with `sha256("global:<name>")[..8]`; `take` has no arguments.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Pod, Zeroable)]
pub struct Take {
    pub discriminator: [u8; 8],
}

impl Take {
    pub const DISCRIMINATOR: [u8; 8] = [149, 226, 52, 104, 6, 142, 230, 39];

    pub const fn new() -> Self {
        Self {
            discriminator: Self::DISCRIMINATOR,
        }
    }
}

impl Default for Take {
    fn default() -> Self {
        Self::new()
    }
}

/// Every account the `take` instruction touches, in program order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TakeAccounts {
    pub taker: Pubkey,
    pub maker: Pubkey,
    pub mint_a: Pubkey,
    pub mint_b: Pubkey,
    pub taker_ata_a: Pubkey,
    pub taker_ata_b: Pubkey,
    pub maker_ata_b: Pubkey,
    pub escrow: Pubkey,
    pub vault: Pubkey,
    pub associated_token_program: Pubkey,
    pub token_program: Pubkey,
    pub system_program: Pubkey,
}

impl TakeAccounts {
    /// Fill in the fixed program accounts around the caller's addresses
    pub fn new(
        taker: Pubkey,
        params: &EscrowParams,
        derived: &DerivedAddresses,
        token_program: &Pubkey,
    ) -> Self {
        Self {
            taker,
            maker: params.maker,
            mint_a: params.mint_a,
            mint_b: params.mint_b,
            taker_ata_a: derived.taker_ata_a,
            taker_ata_b: derived.taker_ata_b,
            maker_ata_b: derived.maker_ata_b,
            escrow: params.escrow,
            vault: derived.vault,
            associated_token_program: spl_associated_token_account::ID,
            token_program: *token_program,
            system_program: system_program::ID,
        }
    }

    pub fn to_account_metas(&self) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.taker, true),
            AccountMeta::new(self.maker, false),
            AccountMeta::new_readonly(self.mint_a, false),
            AccountMeta::new_readonly(self.mint_b, false),
            AccountMeta::new(self.taker_ata_a, false),
            AccountMeta::new(self.taker_ata_b, false),
            AccountMeta::new(self.maker_ata_b, false),
            AccountMeta::new(self.escrow, false),
            AccountMeta::new(self.vault, false),
            AccountMeta::new_readonly(self.associated_token_program, false),
            AccountMeta::new_readonly(self.token_program, false),
            AccountMeta::new_readonly(self.system_program, false),
        ]
    }
}

/// Build the `take` instruction for the escrow program at `program_id`
pub fn take(program_id: &Pubkey, accounts: &TakeAccounts) -> Instruction {
    Instruction::new_with_bytes(
        *program_id,
        bytemuck::bytes_of(&Take::new()),
        accounts.to_account_metas(),
    )
}
