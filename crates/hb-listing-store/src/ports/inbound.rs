//! Inbound (driving) port for the Listing Store subsystem.

use crate::errors::ListingStoreError;
use serde::{Deserialize, Serialize};
use shared_types::{Amount, Listing, ListingId, UserId};

/// Seller input for creating a listing.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewListing {
    /// The seller creating the listing.
    pub owner_id: UserId,
    /// Category name, e.g. "Pomfret".
    pub category: String,
    /// Quantity on offer, in kilograms. Must be strictly positive.
    pub quantity_kg: f64,
    /// Asking price. Must be strictly positive.
    pub base_price: Amount,
    /// Optional photo reference.
    pub photo_url: Option<String>,
}

/// Primary API for the Listing Store subsystem.
///
/// All operations are atomic single-record operations; implementations must
/// be safe to share across concurrent callers.
pub trait ListingStoreApi: Send + Sync {
    /// Create a new listing in the `available` state.
    ///
    /// ## Errors
    /// - `InvalidQuantity` / `InvalidBasePrice` / `EmptyCategory`: input
    ///   validation failed; nothing is stored.
    fn create_listing(&self, new: NewListing) -> Result<Listing, ListingStoreError>;

    /// Fetch one listing by id.
    ///
    /// ## Errors
    /// - `NotFound`: no listing with this id exists.
    fn get(&self, id: ListingId) -> Result<Listing, ListingStoreError>;

    /// All listings owned by a seller, newest first.
    fn listings_by_owner(&self, owner_id: UserId) -> Result<Vec<Listing>, ListingStoreError>;

    /// Listings visible to buyers (`available` or `in_auction`), newest
    /// first.
    fn open_listings(&self) -> Result<Vec<Listing>, ListingStoreError>;

    /// Listings whose category contains `category` (case-insensitive
    /// substring), any status. This is the price advisor's read path.
    fn matching(&self, category: &str) -> Result<Vec<Listing>, ListingStoreError>;

    /// Total number of listings in the store.
    fn listing_count(&self) -> Result<usize, ListingStoreError>;

    /// Atomically transition a listing from `available` to `in_auction`.
    ///
    /// Exactly one of any set of concurrent claimers succeeds; the rest
    /// observe `NotAvailable` with the status that beat them.
    ///
    /// ## Errors
    /// - `NotFound`: no listing with this id exists.
    /// - `NotAvailable`: listing is already `in_auction` or `sold`.
    fn claim_for_auction(&self, id: ListingId) -> Result<Listing, ListingStoreError>;

    /// Transition a listing to `sold`. Idempotent: marking a sold listing
    /// sold again is a no-op.
    ///
    /// ## Errors
    /// - `NotFound`: no listing with this id exists.
    fn mark_sold(&self, id: ListingId) -> Result<(), ListingStoreError>;
}
