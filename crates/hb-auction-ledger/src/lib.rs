//! # Auction Ledger Subsystem
//!
//! Owns each auction's state and enforces monotonically increasing winning
//! bids under concurrent access. The open→closed transition is resolved
//! purely from wall-clock time on access; there is no background scheduler.
//!
//! ## Domain Invariants
//!
//! | Invariant | Enforcement Location |
//! |-----------|----------------------|
//! | Winning amount equals the max accepted bid (default: starting price) | `domain/entities.rs` - `accept_bid()` |
//! | Winner matches the bid that produced the winning amount | `domain/entities.rs` - `accept_bid()` |
//! | Bids are append-only, never mutated or removed | `domain/entities.rs` - no removal API |
//! | `closed`/`cancelled` never revert | `domain/lifecycle.rs` + `application/service.rs` |
//! | Same-auction writes are serialized | `adapters/memory.rs` - version compare-and-store |
//!
//! ## Lazy Lifecycle Resolution
//!
//! ```text
//! [OPEN] ──now > close_deadline──→ [CLOSED]  (listing → sold)
//!    │
//!    └────── administrative ─────→ [CANCELLED]
//! ```
//!
//! `resolve(auction, now)` is a pure function applied at the top of every
//! public operation. An expired auction that nobody touched stays nominally
//! open in storage, but every read or write path persists the transition
//! before any other logic runs. Resolution is idempotent.
//!
//! ## Concurrency
//!
//! The read-validate-write sequence of bid placement is guarded by
//! per-record optimistic versioning: a bid validated against a stale winning
//! amount loses the compare-and-store and is retried against the fresh
//! snapshot, a bounded number of times, before surfacing
//! `ConcurrentModification`. No lock ever spans more than one auction
//! record.
//!
//! ## Module Structure (Hexagonal Architecture)
//!
//! ```text
//! ports/inbound.rs    - AuctionApi trait
//! ports/outbound.rs   - AuctionStore, ListingGateway, TimeSource traits
//! domain/entities.rs  - Auction, Bid, AuctionStatus
//! domain/lifecycle.rs - pure resolve(auction, now)
//! domain/errors.rs    - AuctionError
//! adapters/memory.rs  - InMemoryAuctionStore (versioned records)
//! adapters/clock.rs   - ManualClock for deterministic tests
//! application/        - AuctionLedgerService
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

pub use adapters::clock::ManualClock;
pub use adapters::memory::InMemoryAuctionStore;
pub use application::service::AuctionLedgerService;
pub use config::LedgerConfig;
pub use domain::entities::{Auction, AuctionStatus, Bid, WinnerRef};
pub use domain::errors::AuctionError;
pub use domain::value_objects::{AuctionCounts, AuctionOutcome, BidderStanding};
pub use ports::inbound::AuctionApi;
pub use ports::outbound::{
    AuctionStore, GatewayError, ListingGateway, StoreError, SystemTimeSource, TimeSource,
    VersionedAuction,
};
