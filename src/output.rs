//! Colored console output for the lock reader.
//!
//! Records go to stdout; logs go to stderr through `tracing`.
//! Color scheme: blue+bold headers, cyan values, green success,
//! yellow warnings, dimmed secondary text.

use crate::constants::ETHER_DECIMALS;
use crate::onchain::{slot_key, LockEntry};
use alloy_primitives::{Address, U256};
use chrono::{DateTime, Local};
use colored::Colorize;

// ── Helpers ────────────────────────────────────────────────────────

/// Format a wei amount in ether, trimming trailing zeros.
///
/// - `1000000000000000000` → `"1"`
/// - `1500000000000000000` → `"1.5"`
/// - `1` → `"0.000000000000000001"`
pub fn format_ether(wei: U256) -> String {
    let unit = U256::from(10u64).pow(U256::from(ETHER_DECIMALS));
    let (whole, fraction) = wei.div_rem(unit);
    if fraction.is_zero() {
        return whole.to_string();
    }
    let fraction = format!("{:0>width$}", fraction.to_string(), width = ETHER_DECIMALS);
    format!("{whole}.{}", fraction.trim_end_matches('0'))
}

/// Format a Unix timestamp as a local calendar date/time.
pub fn format_local_time(seconds: u64) -> String {
    i64::try_from(seconds)
        .ok()
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
        .map(|utc| utc.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S %:z").to_string())
        .unwrap_or_else(|| "out of range".to_string())
}

/// Format a lock's start time as `<local date> (<epoch seconds>)`.
pub fn format_start_time(seconds: u64) -> String {
    format!("{} ({seconds})", format_local_time(seconds))
}

// ── Run header ─────────────────────────────────────────────────────

/// Print which contract and endpoint are being read.
pub fn print_banner(contract: &Address, rpc_url: &str, block: &str) {
    println!();
    println!("{}", "=== Lock Storage Reader ===".blue().bold());
    println!("  Contract:  {}", format!("{contract}").cyan());
    println!("  RPC:       {}", rpc_url.cyan());
    println!("  Block:     {}", block.cyan());
}

/// Print the array length and where its data starts.
pub fn print_array_length(length: u64, base_slot: U256) {
    println!("  arrayLength: {}", length.to_string().cyan());
    println!("  {}", format!("base slot: {}", slot_key(base_slot)).dimmed());
    println!();
}

/// Print a warning when the on-chain length was truncated.
pub fn print_truncated(length: u64, cap: u64) {
    println!(
        "  {} Array holds {} locks, reading the first {}.",
        "WARNING:".yellow().bold(),
        length.to_string().cyan(),
        cap.to_string().cyan()
    );
}

// ── Locks ──────────────────────────────────────────────────────────

/// Print one decoded lock, followed by its raw words.
pub fn print_lock(entry: &LockEntry) {
    let record = &entry.record;
    let words = &entry.words;

    println!("{}", format!("locks[{}]:", record.index).blue().bold());
    println!("  user:      {}", format!("{}", record.user).cyan());
    println!("  startTime: {}", format_start_time(record.start_time).cyan());
    println!("  amount:    {} ETH", format_ether(record.amount).cyan());

    println!(
        "  {}",
        format!("Debug - slot {} data: {}", slot_key(words.user_slot), words.user_word).dimmed()
    );
    println!(
        "    {}",
        format!("Offset: 0 - padding: {}", hex::encode(words.padding())).dimmed()
    );
    println!(
        "    {}",
        format!("Offset: 4 - startTime: {}", hex::encode(words.start_time_bytes())).dimmed()
    );
    println!(
        "    {}",
        format!("Offset: 12 - user: {}", hex::encode(words.user_bytes())).dimmed()
    );
    println!(
        "  {}",
        format!(
            "Debug - slot {} data (amount): {}",
            slot_key(words.amount_slot),
            words.amount_word
        )
        .dimmed()
    );
    println!("{}", "----------------------------------------".dimmed());
}

/// Print how many elements were decoded and how many were skipped.
pub fn print_summary(decoded: u64, skipped: u64) {
    if skipped == 0 {
        println!("  {} {} locks decoded", "OK".green().bold(), decoded.to_string().cyan());
    } else {
        println!(
            "  {} {} locks decoded, {} skipped (empty storage)",
            "OK".green().bold(),
            decoded.to_string().cyan(),
            skipped.to_string().yellow()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_ether_whole_units() {
        assert_eq!(format_ether(U256::from(1_000_000_000_000_000_000u64)), "1");
        assert_eq!(format_ether(U256::from(25_000_000_000_000_000_000u128)), "25");
        assert_eq!(format_ether(U256::ZERO), "0");
    }

    #[test]
    fn test_format_ether_fractions() {
        assert_eq!(format_ether(U256::from(1_500_000_000_000_000_000u64)), "1.5");
        assert_eq!(format_ether(U256::from(1u64)), "0.000000000000000001");
        assert_eq!(format_ether(U256::from(123_456_000_000_000_000u64)), "0.123456");
    }

    #[test]
    fn test_format_ether_max() {
        let formatted = format_ether(U256::MAX);
        assert!(formatted.starts_with("115792089237316195423570985008687907853269984665640564039457"));
        assert!(formatted.contains('.'));
    }

    #[test]
    fn test_format_start_time_keeps_epoch_seconds() {
        let formatted = format_start_time(0x65abcd12);
        assert!(formatted.ends_with("(1705757970)"), "{formatted}");
        assert!(formatted.starts_with("2024-01-"), "{formatted}");
    }

    #[test]
    fn test_format_local_time_out_of_range() {
        assert_eq!(format_local_time(u64::MAX), "out of range");
    }
}
