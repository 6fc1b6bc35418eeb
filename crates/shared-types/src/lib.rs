//! # Shared Types Crate
//!
//! Domain entities and identifier types shared across the Harborbid
//! subsystems.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: types referenced by more than one crate
//!   (listing store, auction ledger, price advisor) are defined here.
//! - **Ownership stays with the subsystems**: this crate holds data shapes
//!   only; all state transitions are enforced by the owning subsystem.

pub mod entities;

pub use entities::*;
