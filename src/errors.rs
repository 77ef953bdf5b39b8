use alloy_primitives::U256;
use thiserror::Error;

/// Errors raised while reading and decoding lock storage.
#[derive(Debug, Error)]
pub enum LockReaderError {
    /// Transport, node or response decoding failure on a storage read
    #[error("RPC request failed: {0}")]
    Rpc(#[from] jsonrpsee::core::ClientError),

    /// The RPC endpoint could not be turned into a client
    #[error("Invalid RPC URL {url}: {reason}")]
    InvalidRpcUrl {
        /// The rejected URL
        url: String,
        /// Why the client builder refused it
        reason: String,
    },

    /// Node returned a storage value wider than one word
    #[error("Storage value at slot {slot:#x} is {len} bytes, expected at most 32")]
    MalformedWord {
        /// Slot that was read
        slot: U256,
        /// Length of the returned value
        len: usize,
    },

    /// Array length does not fit the iteration counter
    #[error("Array length {length} does not fit in u64")]
    LengthOverflow {
        /// The raw length read from storage
        length: U256,
    },
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, LockReaderError>;
