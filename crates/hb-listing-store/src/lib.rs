//! # Listing Store Subsystem
//!
//! Owns catch listings and their availability state. Leaf dependency of the
//! auction ledger.
//!
//! ## Purpose
//!
//! Sellers create listings here; buyers browse them. The `status` field's
//! `in_auction`/`sold` edges are ceded to the auction lifecycle and are only
//! reachable through the conditional transitions on [`ListingStoreApi`]
//! (`claim_for_auction`, `mark_sold`), which are atomic per record.
//!
//! ## Domain Invariants
//!
//! - A listing enters `in_auction` only from `available`, and exactly one
//!   claimer wins a concurrent race (`claim_for_auction` is a conditional
//!   transition inside the store lock).
//! - `sold` is terminal; `mark_sold` is idempotent.
//! - Listings are never deleted once sold.
//!
//! ## Module Structure (Hexagonal Architecture)
//!
//! ```text
//! ports/inbound.rs   - ListingStoreApi trait
//! ports/outbound.rs  - TimeSource trait
//! adapters/memory.rs - InMemoryListingStore
//! errors.rs          - ListingStoreError
//! ```

pub mod adapters;
pub mod errors;
pub mod ports;

pub use adapters::memory::InMemoryListingStore;
pub use errors::ListingStoreError;
pub use ports::inbound::{ListingStoreApi, NewListing};
pub use ports::outbound::{SystemTimeSource, TimeSource};
