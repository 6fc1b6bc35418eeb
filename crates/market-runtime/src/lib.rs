//! # Market Runtime
//!
//! Wires the market subsystems into one node: the listing store, the
//! auction ledger, and the price advisor, all over shared in-memory
//! adapters. The subsystem crates only know their own ports; everything
//! that crosses a crate boundary goes through an adapter defined here.
//!
//! - `adapters/` - port implementations bridging the subsystems
//! - `container` - `MarketNode`, the dependency-injected assembly

pub mod adapters;
pub mod container;

pub use adapters::{ListingStoreGateway, MarketViewAdapter};
pub use container::MarketNode;
