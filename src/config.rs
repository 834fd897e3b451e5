use std::{net::SocketAddr, str::FromStr};

use clap::{Parser, ValueEnum};
use solana_program::pubkey::Pubkey;
use solana_sdk::commitment_config::{CommitmentConfig, CommitmentLevel};

use crate::{ActionMetadata, DEFAULT_ADDRESS, DEFAULT_PROGRAM_ID};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum TokenProgram {
    #[default]
    Token,
    #[value(name = "token-2022")]
    Token2022,
}

impl TokenProgram {
    pub fn id(&self) -> Pubkey {
        match self {
            Self::Token => spl_token::ID,
            Self::Token2022 => spl_token_2022::ID,
        }
    }
}

#[derive(Clone, Debug, Parser)]
#[command(name = "escrow-take-action", version, about = "Serves unsigned escrow take transactions")]
pub struct Config {
    #[arg(long, env = "ESCROW_ACTION_BIND", default_value = "0.0.0.0:3000")]
    pub bind: SocketAddr,

    #[arg(long, env = "SOLANA_RPC_URL", default_value = "https://api.devnet.solana.com")]
    pub rpc_url: String,

    /// Commitment the latest blockhash is fetched at
    #[arg(
        long,
        env = "SOLANA_COMMITMENT",
        default_value = "finalized",
        value_parser = parse_commitment
    )]
    pub commitment: CommitmentConfig,

    #[arg(long, env = "ESCROW_PROGRAM_ID", default_value_t = DEFAULT_PROGRAM_ID)]
    pub program_id: Pubkey,

    #[arg(long, env = "ESCROW_TOKEN_PROGRAM", value_enum, default_value_t = TokenProgram::Token)]
    pub token_program: TokenProgram,

    /// Substituted for any escrow, maker or mint left out of the query
    #[arg(long, env = "ESCROW_DEFAULT_ADDRESS", default_value_t = DEFAULT_ADDRESS)]
    pub default_address: Pubkey,

    #[arg(long, env = "ACTION_ICON", default_value = "https://example.com/icon.png")]
    pub icon: String,

    #[arg(long, env = "ACTION_TITLE", default_value = "Escrow")]
    pub title: String,

    #[arg(long, env = "ACTION_DESCRIPTION", default_value = "Open a escrow on Solana.")]
    pub description: String,

    #[arg(long, env = "ACTION_LABEL", default_value = "Accept Trade")]
    pub label: String,
}

impl Config {
    pub fn settings(&self) -> ActionSettings {
        ActionSettings {
            program_id: self.program_id,
            token_program: self.token_program.id(),
            default_address: self.default_address,
            metadata: ActionMetadata {
                icon: self.icon.clone(),
                title: self.title.clone(),
                description: self.description.clone(),
                label: self.label.clone(),
            },
        }
    }
}

/// Everything the handlers need that does not change between requests
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionSettings {
    pub program_id: Pubkey,
    pub token_program: Pubkey,
    pub default_address: Pubkey,
    pub metadata: ActionMetadata,
}

impl Default for ActionSettings {
    fn default() -> Self {
        Self {
            program_id: DEFAULT_PROGRAM_ID,
            token_program: TokenProgram::default().id(),
            default_address: DEFAULT_ADDRESS,
            metadata: ActionMetadata::default(),
        }
    }
}

fn parse_commitment(value: &str) -> Result<CommitmentConfig, String> {
    CommitmentLevel::from_str(value)
        .map(|commitment| CommitmentConfig { commitment })
        .map_err(|_| format!("unknown commitment level: {value}"))
}
