//! Adapters for the Listing Store subsystem.

pub mod memory;
