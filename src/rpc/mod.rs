//! Storage RPC
//!
//! Minimal `eth_getStorageAt` binding over jsonrpsee. The client half is used by
//! [`crate::onchain::RpcStorageReader`]; the server half lets tests stand up an
//! in-process node.

pub mod api;

pub use api::{EthStorageApiClient, EthStorageApiServer};

/// Block tag used when no block is pinned.
pub const LATEST_BLOCK: &str = "latest";

/// Render the block parameter for `eth_getStorageAt`.
pub fn block_param(block: Option<u64>) -> String {
    match block {
        Some(number) => format!("{number:#x}"),
        None => LATEST_BLOCK.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_param_defaults_to_latest() {
        assert_eq!(block_param(None), "latest");
    }

    #[test]
    fn test_block_param_is_hex_quantity() {
        assert_eq!(block_param(Some(0)), "0x0");
        assert_eq!(block_param(Some(255)), "0xff");
        assert_eq!(block_param(Some(12_345_678)), "0xbc614e");
    }
}
