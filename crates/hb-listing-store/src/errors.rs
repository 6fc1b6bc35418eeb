//! Listing store error types.

use shared_types::{ListingId, ListingStatus};
use thiserror::Error;

/// Listing store error type.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ListingStoreError {
    /// Referenced listing does not exist.
    #[error("Listing not found: {0}")]
    NotFound(ListingId),

    /// Listing is not in the `available` state, so it cannot be claimed
    /// for a new auction.
    #[error("Listing {id} is not available (status: {status:?})")]
    NotAvailable { id: ListingId, status: ListingStatus },

    /// Quantity must be strictly positive.
    #[error("Invalid quantity: {quantity_kg} kg")]
    InvalidQuantity { quantity_kg: f64 },

    /// Base price must be strictly positive.
    #[error("Invalid base price: {base_price}")]
    InvalidBasePrice { base_price: u64 },

    /// Category name is required.
    #[error("Category name must not be empty")]
    EmptyCategory,

    /// Backing store unreachable or timed out. Safe to retry.
    #[error("Listing store unavailable: {0}")]
    Unavailable(String),
}
