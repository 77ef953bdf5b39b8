use alloy_primitives::{address, Address};

/// Lock contract whose `locks` array is decoded by default (Arbitrum Sepolia)
pub const LOCKS_CONTRACT_ADDRESS: Address = address!("543FF5baFD7fcD727711900A48F040B4405D4618");
/// Public Arbitrum Sepolia JSON-RPC endpoint
pub const ARBITRUM_SEPOLIA_RPC_URL: &str = "https://sepolia-rollup.arbitrum.io/rpc";
/// Storage word size in bytes
pub const WORD_LENGTH: usize = 32;
/// Ethereum address length (20 bytes)
pub const ADDRESS_LENGTH: usize = 20;
/// Decimals of the token amount stored in each lock (wei → ether)
pub const ETHER_DECIMALS: usize = 18;
/// Default timeout for a single storage read
pub const DEFAULT_RPC_TIMEOUT_SECS: u64 = 60;
