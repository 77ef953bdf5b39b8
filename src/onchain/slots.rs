/// Lock contract storage layout.
///
/// Matches `struct Lock { uint64 startTime; address user; uint256 amount; }` held in
/// `Lock[] locks` as the contract's first state variable.
pub mod lock_slots {
    use alloy_primitives::U256;

    /// slot 0: locks.length (dynamic array length)
    pub const LOCKS_LENGTH: U256 = U256::from_limbs([0, 0, 0, 0]);
    /// Storage words occupied by one `Lock`
    pub const WORDS_PER_LOCK: u64 = 2;
    /// word 0 of an element: packed startTime + user
    pub const USER_AND_START_TIME: u64 = 0;
    /// word 1 of an element: amount (uint256)
    pub const AMOUNT: u64 = 1;
}

/// Byte ranges inside the packed first word of a `Lock`.
///
/// Solidity packs right to left, so the address sits in the low-order bytes:
/// `[4 bytes padding][8 bytes startTime][20 bytes user]`.
pub mod lock_word_layout {
    use std::ops::Range;

    /// Unused high-order bytes
    pub const PADDING: Range<usize> = 0..4;
    /// startTime (uint64, big-endian)
    pub const START_TIME: Range<usize> = 4..12;
    /// user (address)
    pub const USER: Range<usize> = 12..32;
}
