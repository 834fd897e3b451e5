use solana_program::pubkey::Pubkey;
use spl_associated_token_account::get_associated_token_address_with_program_id;

use crate::EscrowParams;

/// Associated token accounts a take moves tokens through
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DerivedAddresses {
    /// Escrow's mint A account
    pub vault: Pubkey,
    pub taker_ata_a: Pubkey,
    pub taker_ata_b: Pubkey,
    pub maker_ata_b: Pubkey,
}

impl DerivedAddresses {
    pub fn derive(taker: &Pubkey, params: &EscrowParams, token_program: &Pubkey) -> Self {
        Self {
            vault: associated_token_address(&params.escrow, &params.mint_a, token_program),
            taker_ata_a: associated_token_address(taker, &params.mint_a, token_program),
            taker_ata_b: associated_token_address(taker, &params.mint_b, token_program),
            maker_ata_b: associated_token_address(&params.maker, &params.mint_b, token_program),
        }
    }
}

/// Owners may be off-curve, so the escrow PDA can hold a vault.
#[inline]
pub fn associated_token_address(owner: &Pubkey, mint: &Pubkey, token_program: &Pubkey) -> Pubkey {
    get_associated_token_address_with_program_id(owner, mint, token_program)
}
