use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use escrow_take_action::{router, AppState, Config, ACTION_PATH};
use solana_client::nonblocking::rpc_client::RpcClient;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = Config::parse();

    // One client for the life of the process
    let rpc = RpcClient::new_with_commitment(config.rpc_url.clone(), config.commitment);
    let state = AppState::new(Arc::new(rpc), config.settings());

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;

    info!(
        addr = %config.bind,
        path = ACTION_PATH,
        rpc = %config.rpc_url,
        program = %config.program_id,
        "serving escrow take action"
    );

    axum::serve(listener, router(state))
        .await
        .context("server exited")
}
