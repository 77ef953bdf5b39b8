use crate::constants::{ARBITRUM_SEPOLIA_RPC_URL, DEFAULT_RPC_TIMEOUT_SECS, LOCKS_CONTRACT_ADDRESS};
use alloy_primitives::{Address, U256};
use clap::Parser;

/// CLI arguments for the lock reader
#[derive(Parser, Debug)]
#[command(
    name = "read-locks",
    about = "Decode lock records straight from a contract's raw storage slots"
)]
pub struct Cli {
    /// HTTP JSON-RPC endpoint to read storage from
    #[arg(long, env = "LOCKS_RPC_URL", default_value = ARBITRUM_SEPOLIA_RPC_URL)]
    pub rpc_url: String,

    /// Address of the lock contract
    #[arg(long, env = "LOCKS_CONTRACT", default_value_t = LOCKS_CONTRACT_ADDRESS)]
    pub contract: Address,

    /// Storage slot holding the `locks` array length
    #[arg(long, default_value = "0")]
    pub array_slot: U256,

    /// Pin reads to a block number instead of `latest`
    #[arg(long)]
    pub block: Option<u64>,

    /// Stop after this many array elements even if the on-chain length is larger.
    ///
    /// Unbounded by default: the stored length is trusted as-is.
    #[arg(long)]
    pub max_locks: Option<u64>,

    /// Timeout for each storage read, in seconds
    #[arg(long, default_value_t = DEFAULT_RPC_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Emit logs as newline-delimited JSON on stderr
    #[arg(long)]
    pub log_json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_hardcoded_target() {
        let cli = Cli::try_parse_from(["read-locks"]).unwrap();
        assert_eq!(cli.rpc_url, ARBITRUM_SEPOLIA_RPC_URL);
        assert_eq!(cli.contract, LOCKS_CONTRACT_ADDRESS);
        assert_eq!(cli.array_slot, U256::ZERO);
        assert_eq!(cli.block, None);
        assert_eq!(cli.max_locks, None);
        assert_eq!(cli.timeout_secs, DEFAULT_RPC_TIMEOUT_SECS);
        assert!(!cli.log_json);
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::try_parse_from([
            "read-locks",
            "--rpc-url",
            "http://localhost:8545",
            "--contract",
            "0x0000000000000000000000000000000000000001",
            "--array-slot",
            "3",
            "--block",
            "1234",
            "--max-locks",
            "10",
        ])
        .unwrap();
        assert_eq!(cli.rpc_url, "http://localhost:8545");
        assert_eq!(cli.contract, Address::with_last_byte(1));
        assert_eq!(cli.array_slot, U256::from(3));
        assert_eq!(cli.block, Some(1234));
        assert_eq!(cli.max_locks, Some(10));
    }

    #[test]
    fn test_rejects_bad_contract_address() {
        assert!(Cli::try_parse_from(["read-locks", "--contract", "0x1234"]).is_err());
    }
}
