//! # Harborbid Test Suite
//!
//! Unified test crate for cross-crate behavior that no single subsystem
//! can test alone.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── auction_flow.rs     # Listing → auction → bids → settlement
//!     ├── concurrent_bids.rs  # Bid storms and race outcomes
//!     └── price_flow.rs       # Advisor over a wired node
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p hb-tests
//! cargo test -p hb-tests integration::concurrent_bids::
//! ```

#![allow(unused_imports)]

pub mod integration;
