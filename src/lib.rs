//! # Lock Slot Reader
//!
//! Decodes the `locks` array of a lock contract directly from its raw storage
//! slots over JSON-RPC, without going through the contract ABI.

pub mod cli;
pub mod constants;
pub mod errors;
pub mod onchain;
pub mod output;
pub mod rpc;
