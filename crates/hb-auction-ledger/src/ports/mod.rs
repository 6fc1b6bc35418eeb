//! Ports for the auction ledger.
//!
//! - `inbound`: the API this crate exposes to the application
//! - `outbound`: dependencies of the ledger (storage, listings, time)

pub mod inbound;
pub mod outbound;
