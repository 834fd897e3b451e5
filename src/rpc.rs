use async_trait::async_trait;
use solana_client::{client_error::ClientError, nonblocking::rpc_client::RpcClient};
use solana_sdk::hash::Hash;

/// Where the handler gets the blockhash a transaction is built against
#[async_trait]
pub trait BlockhashSource: Send + Sync {
    async fn latest_blockhash(&self) -> Result<Hash, ClientError>;
}

/// Uses the commitment the client was constructed with.
#[async_trait]
impl BlockhashSource for RpcClient {
    async fn latest_blockhash(&self) -> Result<Hash, ClientError> {
        self.get_latest_blockhash().await
    }
}
