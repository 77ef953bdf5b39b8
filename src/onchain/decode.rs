use super::helpers::{decode_address, decode_start_time, decode_u256};
use super::slots::lock_word_layout;
use alloy_primitives::{Address, B256, U256};

/// One entry of the contract's `locks` array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockRecord {
    /// Position in the array
    pub index: u64,
    /// Depositor
    pub user: Address,
    /// Lock start, Unix seconds
    pub start_time: u64,
    /// Locked amount in wei
    pub amount: U256,
}

/// The raw words a [`LockRecord`] was decoded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockWords {
    /// Slot of the packed user/startTime word
    pub user_slot: U256,
    /// Packed user/startTime word
    pub user_word: B256,
    /// Slot of the amount word
    pub amount_slot: U256,
    /// Amount word
    pub amount_word: B256,
}

impl LockWords {
    /// Padding bytes above startTime (expected to be zero).
    pub fn padding(&self) -> &[u8] {
        &self.user_word[lock_word_layout::PADDING]
    }

    /// Raw startTime bytes.
    pub fn start_time_bytes(&self) -> &[u8] {
        &self.user_word[lock_word_layout::START_TIME]
    }

    /// Raw user address bytes.
    pub fn user_bytes(&self) -> &[u8] {
        &self.user_word[lock_word_layout::USER]
    }
}

/// A decoded lock together with its source words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockEntry {
    /// Decoded fields
    pub record: LockRecord,
    /// Words the fields came from
    pub words: LockWords,
}

/// Decode the two storage words of element `index`.
pub fn decode_lock(index: u64, words: LockWords) -> LockEntry {
    let record = LockRecord {
        index,
        user: decode_address(words.user_word),
        start_time: decode_start_time(words.user_word),
        amount: decode_u256(words.amount_word),
    };
    LockEntry { record, words }
}
