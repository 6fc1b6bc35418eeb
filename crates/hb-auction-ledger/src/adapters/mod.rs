//! Adapters for the auction ledger.

pub mod clock;
pub mod memory;
