//! # Core Domain Entities
//!
//! Defines the entities shared across subsystems.
//!
//! ## Clusters
//!
//! - **Identity**: `ListingId`, `AuctionId`, `UserId`
//! - **Time & Money**: `Timestamp`, `Amount`
//! - **Catalogue**: `Listing`, `ListingStatus`

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Timestamp in milliseconds since UNIX epoch.
pub type Timestamp = u64;

/// A price or bid amount in whole currency units.
///
/// Amounts are plain positive integers; no currency precision or rounding
/// rules are imposed below the whole unit.
pub type Amount = u64;

/// Unique identifier for a listing.
pub type ListingId = Uuid;

/// Unique identifier for an auction.
pub type AuctionId = Uuid;

/// Unique identifier for a user (seller or bidder).
pub type UserId = Uuid;

/// Availability state of a listing.
///
/// State machine:
/// ```text
/// [AVAILABLE] ──auction opens──→ [IN_AUCTION] ──auction closes──→ [SOLD]
/// ```
///
/// The `InAuction` and `Sold` edges are written only by the auction ledger
/// (via the listing store's conditional transitions); no other component
/// mutates this field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ListingStatus {
    /// Listed and free to be put under auction.
    #[default]
    Available,
    /// Referenced by exactly one open auction.
    InAuction,
    /// The auction over this listing has closed. Terminal.
    Sold,
}

/// A sellable catch listing.
///
/// Created by the seller; the `status` field is ceded to the auction
/// lifecycle once an auction opens. A listing is never deleted once sold.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    /// Unique listing identifier.
    pub id: ListingId,
    /// The seller who owns this listing.
    pub owner_id: UserId,
    /// Category name, e.g. "Pomfret" or "Rohu". Matched case-insensitively
    /// by the price advisor.
    pub category: String,
    /// Quantity on offer, in kilograms.
    pub quantity_kg: f64,
    /// Seller's asking price per unit; copied into the auction's starting
    /// price at open time.
    pub base_price: Amount,
    /// Optional photo reference. Empty string when absent.
    pub photo_url: String,
    /// Availability state.
    pub status: ListingStatus,
    /// When the listing was created (ms).
    pub created_at: Timestamp,
}

impl Listing {
    /// True if the listing can be placed under a new auction.
    pub fn is_available(&self) -> bool {
        self.status == ListingStatus::Available
    }
}
