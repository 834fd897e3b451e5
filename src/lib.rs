//! Serves unsigned escrow `take` transactions to Solana wallets.
//!
//! A POST carries the taker's account in its body and the escrow, maker and
//! mints in its query. The handler derives the token accounts the take moves
//! funds through, builds the program instruction, pins it to a recent
//! blockhash and hands it back base64-encoded for the wallet to sign.

mod actions;
pub use actions::*;

mod address;
pub use address::*;

mod config;
pub use config::*;

mod error;
pub use error::*;

pub mod instructions;
pub use instructions::{Take, TakeAccounts};

mod query;
pub use query::*;

mod rpc;
pub use rpc::*;

mod state;
pub use state::*;

pub mod transaction;


use solana_program::{pubkey, pubkey::Pubkey};

/// Escrow program the take instruction targets unless configured otherwise
pub const DEFAULT_PROGRAM_ID: Pubkey = pubkey!("145AeoxJYRT7MDomSmf4HJKf8BdZ7KQGF72D3DVrbwBq");

/// Stand-in for escrow, maker and mint when a request leaves them out
pub const DEFAULT_ADDRESS: Pubkey = pubkey!("429SnKX9VgdPoKDu4NLfMRc54oL9rd38VqWFFUcXz8WK");
