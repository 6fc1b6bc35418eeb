//! Domain layer of the auction ledger.
//!
//! Pure state and policy; no I/O, no clocks. Time enters only as a
//! parameter.

pub mod entities;
pub mod errors;
pub mod lifecycle;
pub mod value_objects;
