use super::slots::lock_word_layout;
use crate::constants::WORD_LENGTH;
use crate::errors::{LockReaderError, Result};
use alloy_primitives::{Address, Keccak256, B256, U256};

/// Compute the base slot for a Solidity dynamic array's data.
///
/// For `Lock[] locks` at slot 0:
///   base = keccak256(abi.encode(0))
///   locks[0] lives at base + 0 and base + 1
///   locks[1] lives at base + 2 and base + 3
///   etc.
pub fn dynamic_array_base_slot(array_slot: U256) -> U256 {
    let mut hasher = Keccak256::new();
    hasher.update(B256::from(array_slot.to_be_bytes()).as_slice());
    U256::from_be_bytes(hasher.finalize().0)
}

/// Slot of word `offset` inside element `index` of an array whose elements span
/// `words_per_element` slots.
///
/// Wraps modulo 2^256 like the EVM does.
pub fn array_element_slot(base: U256, index: u64, words_per_element: u64, offset: u64) -> U256 {
    base.wrapping_add(U256::from(index).wrapping_mul(U256::from(words_per_element)))
        .wrapping_add(U256::from(offset))
}

/// Convert a slot number into the 32-byte key sent over RPC.
pub fn slot_key(slot: U256) -> B256 {
    B256::from(slot.to_be_bytes())
}

/// Build a storage word from the raw bytes a node returned.
///
/// Some nodes strip leading zeros, so short values are left-padded.
pub fn word_from_bytes(slot: U256, bytes: &[u8]) -> Result<B256> {
    if bytes.len() > WORD_LENGTH {
        return Err(LockReaderError::MalformedWord { slot, len: bytes.len() });
    }
    let mut word = [0u8; WORD_LENGTH];
    word[WORD_LENGTH - bytes.len()..].copy_from_slice(bytes);
    Ok(B256::from(word))
}

/// Decode an address from a B256 storage value (low-order 20 bytes).
pub fn decode_address(value: B256) -> Address {
    Address::from_slice(&value[lock_word_layout::USER])
}

/// Decode the packed startTime (bytes 4..12) from a lock's first word.
pub fn decode_start_time(value: B256) -> u64 {
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&value[lock_word_layout::START_TIME]);
    u64::from_be_bytes(bytes)
}

/// Decode a full-width uint256 from a B256 storage value.
pub fn decode_u256(value: B256) -> U256 {
    U256::from_be_bytes(value.0)
}

/// Decode an array length, rejecting values that cannot be iterated.
pub fn decode_length(value: B256) -> Result<u64> {
    let length = decode_u256(value);
    u64::try_from(length).map_err(|_| LockReaderError::LengthOverflow { length })
}

/// Pack a lock's first word the way the contract stores it.
pub fn encode_user_and_start_time(user: Address, start_time: u64) -> B256 {
    let mut bytes = [0u8; WORD_LENGTH];
    bytes[lock_word_layout::START_TIME].copy_from_slice(&start_time.to_be_bytes());
    bytes[lock_word_layout::USER].copy_from_slice(user.as_slice());
    B256::from(bytes)
}

/// Encode a uint256 into a B256 storage value.
pub fn encode_u256(value: U256) -> B256 {
    B256::from(value.to_be_bytes())
}
