use super::decode::{decode_lock, LockEntry, LockWords};
use super::helpers::{array_element_slot, decode_length, dynamic_array_base_slot};
use super::slots::lock_slots;
use super::StorageReader;
use crate::errors::Result;
use alloy_primitives::{Address, U256};
use tracing::{debug, warn};

/// Outcome of reading one array element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LockSlot {
    /// Both words were returned and decoded
    Present(LockEntry),
    /// One of the two words came back empty; the element is skipped
    Missing {
        /// Index of the skipped element
        index: u64,
    },
}

/// Number of elements to visit given the on-chain length and an optional cap.
pub fn bounded_length(length: u64, max_locks: Option<u64>) -> u64 {
    match max_locks {
        Some(cap) if length > cap => {
            warn!(length, cap, "Array length exceeds cap, truncating");
            cap
        }
        _ => length,
    }
}

/// Walks the `locks` array of one contract through a [`StorageReader`].
///
/// Reads are issued one at a time in ascending slot order.
pub struct LockReader<'a, R> {
    reader: &'a R,
    contract: Address,
    length_slot: U256,
    base_slot: U256,
}

impl<'a, R: StorageReader> LockReader<'a, R> {
    /// Reader for the array whose length lives at `length_slot`.
    pub fn new(reader: &'a R, contract: Address, length_slot: U256) -> Self {
        Self {
            reader,
            contract,
            length_slot,
            base_slot: dynamic_array_base_slot(length_slot),
        }
    }

    /// Reader for the default layout (`locks` at slot 0).
    pub fn with_default_layout(reader: &'a R, contract: Address) -> Self {
        Self::new(reader, contract, lock_slots::LOCKS_LENGTH)
    }

    /// Contract being read.
    pub fn contract(&self) -> Address {
        self.contract
    }

    /// First slot of the array data, `keccak256(length_slot)`.
    pub fn base_slot(&self) -> U256 {
        self.base_slot
    }

    /// Read the array length. An empty slot counts as zero.
    pub async fn array_length(&self) -> Result<u64> {
        let value = self
            .reader
            .read_storage(self.contract, self.length_slot)
            .await?
            .unwrap_or_default();
        decode_length(value)
    }

    /// Slots of the (user/startTime, amount) words of element `index`.
    pub fn element_slots(&self, index: u64) -> (U256, U256) {
        (
            array_element_slot(
                self.base_slot,
                index,
                lock_slots::WORDS_PER_LOCK,
                lock_slots::USER_AND_START_TIME,
            ),
            array_element_slot(
                self.base_slot,
                index,
                lock_slots::WORDS_PER_LOCK,
                lock_slots::AMOUNT,
            ),
        )
    }

    /// Read and decode element `index`.
    ///
    /// Both words are always requested, first then second. RPC errors propagate;
    /// an empty word only marks the element as missing.
    pub async fn read_lock(&self, index: u64) -> Result<LockSlot> {
        let (user_slot, amount_slot) = self.element_slots(index);

        let user_word = self.reader.read_storage(self.contract, user_slot).await?;
        let amount_word = self.reader.read_storage(self.contract, amount_slot).await?;

        match (user_word, amount_word) {
            (Some(user_word), Some(amount_word)) => {
                let words = LockWords { user_slot, user_word, amount_slot, amount_word };
                Ok(LockSlot::Present(decode_lock(index, words)))
            }
            (user_word, amount_word) => {
                debug!(
                    index,
                    user_word_present = user_word.is_some(),
                    amount_word_present = amount_word.is_some(),
                    "Skipping lock with empty storage"
                );
                Ok(LockSlot::Missing { index })
            }
        }
    }

    /// Read every present lock in index order.
    pub async fn read_all_locks(&self, max_locks: Option<u64>) -> Result<Vec<LockEntry>> {
        let length = bounded_length(self.array_length().await?, max_locks);

        let mut locks = Vec::new();
        for index in 0..length {
            if let LockSlot::Present(entry) = self.read_lock(index).await? {
                locks.push(entry);
            }
        }
        Ok(locks)
    }
}
