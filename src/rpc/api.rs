use alloy_primitives::{Address, Bytes, B256};
use jsonrpsee::{core::RpcResult, proc_macros::rpc};

/// The slice of the `eth_*` namespace needed to read raw contract storage.
#[rpc(client, server, namespace = "eth")]
pub trait EthStorageApi {
    /// Returns the value stored at `slot` of `address` at the given block.
    ///
    /// Nodes answer with a 32-byte hex word; `null` or `0x` means nothing was returned.
    #[method(name = "getStorageAt")]
    async fn storage_at(
        &self,
        address: Address,
        slot: B256,
        block: String,
    ) -> RpcResult<Option<Bytes>>;
}
