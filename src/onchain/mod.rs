//! Raw Storage Lock Readers
//!
//! Reads the lock contract's `Lock[] locks` array straight from storage,
//! bypassing the ABI:
//!
//!   slot 0                      → locks.length
//!   keccak256(slot 0) + 2i      → [padding | startTime | user]
//!   keccak256(slot 0) + 2i + 1  → amount
//!
//! Storage layout must match the deployed Solidity contract.

pub mod decode;
pub mod helpers;
pub mod providers;
pub mod readers;
pub mod slots;

// Re-export the StorageReader trait and key types at module level
pub use decode::{decode_lock, LockEntry, LockRecord, LockWords};
pub use helpers::{
    array_element_slot, decode_address, decode_length, decode_start_time, decode_u256,
    dynamic_array_base_slot, encode_u256, encode_user_and_start_time, slot_key, word_from_bytes,
};
pub use providers::RpcStorageReader;
pub use readers::{bounded_length, LockReader, LockSlot};
pub use slots::{lock_slots, lock_word_layout};

use crate::errors::Result;
use alloy_primitives::{Address, B256, U256};

/// Trait for reading contract storage slots.
///
/// In production: implemented by [`RpcStorageReader`] (`eth_getStorageAt`)
/// In tests: implemented by an in-memory map
#[async_trait::async_trait]
pub trait StorageReader: Send + Sync {
    /// Read a storage slot value from a contract address.
    /// Returns `Ok(None)` if the node returned nothing for the slot.
    async fn read_storage(&self, address: Address, slot: U256) -> Result<Option<B256>>;
}
