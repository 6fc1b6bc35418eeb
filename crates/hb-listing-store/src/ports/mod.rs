//! Ports for the Listing Store subsystem.
//!
//! - `inbound`: the API this crate exposes to the rest of the system
//! - `outbound`: dependencies injected into adapters

pub mod inbound;
pub mod outbound;
