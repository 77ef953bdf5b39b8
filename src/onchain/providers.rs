use super::helpers::{slot_key, word_from_bytes};
use super::StorageReader;
use crate::errors::{LockReaderError, Result};
use crate::rpc::{block_param, EthStorageApiClient};
use alloy_primitives::{Address, B256, U256};
use jsonrpsee::http_client::{HttpClient, HttpClientBuilder};
use std::time::Duration;
use tracing::debug;

/// Reads contract storage from a node over HTTP JSON-RPC (`eth_getStorageAt`).
///
/// Each call is a single request; there is no batching and no retry.
///
/// # Usage
/// ```ignore
/// let reader = RpcStorageReader::new(ARBITRUM_SEPOLIA_RPC_URL, None, Duration::from_secs(60))?;
/// let locks = LockReader::with_default_layout(&reader, LOCKS_CONTRACT_ADDRESS);
/// let length = locks.array_length().await?;
/// ```
pub struct RpcStorageReader {
    client: HttpClient,
    block: String,
}

impl RpcStorageReader {
    /// Connect to `url`, reading at `block` (or `latest`).
    pub fn new(url: &str, block: Option<u64>, timeout: Duration) -> Result<Self> {
        let client = HttpClientBuilder::default()
            .request_timeout(timeout)
            .build(url)
            .map_err(|e| LockReaderError::InvalidRpcUrl {
                url: url.to_string(),
                reason: e.to_string(),
            })?;
        Ok(Self { client, block: block_param(block) })
    }

    /// Block parameter sent with every read.
    pub fn block(&self) -> &str {
        &self.block
    }
}

#[async_trait::async_trait]
impl StorageReader for RpcStorageReader {
    async fn read_storage(&self, address: Address, slot: U256) -> Result<Option<B256>> {
        let key = slot_key(slot);
        let value = self.client.storage_at(address, key, self.block.clone()).await?;
        debug!(%address, slot = %key, value = ?value, "eth_getStorageAt");

        match value {
            Some(bytes) if !bytes.is_empty() => word_from_bytes(slot, &bytes).map(Some),
            _ => Ok(None),
        }
    }
}
