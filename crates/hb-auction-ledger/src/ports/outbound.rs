//! Outbound (driven) ports for the auction ledger.
//!
//! These traits define the ledger's dependencies: auction record storage,
//! the listing store, and time. All are `&self` traits; implementations use
//! interior mutability and must be safe to share across concurrent callers.

use crate::domain::entities::Auction;
use shared_types::{AuctionId, Listing, ListingId, ListingStatus, Timestamp};
use std::sync::Arc;
use thiserror::Error;

/// Record version for optimistic concurrency.
pub type Version = u64;

/// An auction snapshot together with its stored version.
#[derive(Clone, Debug, PartialEq)]
pub struct VersionedAuction {
    pub auction: Auction,
    pub version: Version,
}

/// Auction store error type.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum StoreError {
    /// No record with this id exists.
    #[error("Auction not found: {0}")]
    NotFound(AuctionId),

    /// An auction with this id already exists.
    #[error("Auction already exists: {0}")]
    Duplicate(AuctionId),

    /// The stored version moved since the caller's load; the write was not
    /// applied and must be retried against a fresh snapshot.
    #[error("Version conflict on auction {id}: expected {expected}, stored {actual}")]
    VersionConflict {
        id: AuctionId,
        expected: Version,
        actual: Version,
    },

    /// Backing store unreachable or timed out.
    #[error("Auction store unavailable: {0}")]
    Unavailable(String),
}

/// Durable storage for auction records, keyed by auction id.
///
/// Writes are guarded by a per-record version check; there is no
/// cross-auction locking. Operations complete or fail within a bounded
/// timeout (`Unavailable`), never hang.
pub trait AuctionStore: Send + Sync {
    /// Load one record with its current version.
    fn load(&self, id: AuctionId) -> Result<Option<VersionedAuction>, StoreError>;

    /// Insert a new record at version 1.
    ///
    /// ## Errors
    /// - `Duplicate` if a record with this id already exists.
    fn insert(&self, auction: Auction) -> Result<Version, StoreError>;

    /// Replace a record if and only if its stored version still equals
    /// `expected`. Returns the new version.
    ///
    /// ## Errors
    /// - `VersionConflict` if the record changed since the caller's load.
    /// - `NotFound` if the record does not exist.
    fn compare_and_store(
        &self,
        expected: Version,
        auction: Auction,
    ) -> Result<Version, StoreError>;

    /// Snapshot of all records. Used by list queries; each returned record
    /// still goes through lifecycle resolution before leaving the ledger.
    fn all(&self) -> Result<Vec<VersionedAuction>, StoreError>;
}

/// Listing gateway error type.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum GatewayError {
    /// Referenced listing does not exist.
    #[error("Listing not found: {0}")]
    NotFound(ListingId),

    /// Listing is not `available` to be claimed.
    #[error("Listing {id} is not available (status: {status:?})")]
    NotAvailable { id: ListingId, status: ListingStatus },

    /// Listing store unreachable or timed out.
    #[error("Listing store unavailable: {0}")]
    Unavailable(String),
}

/// Interface to the listing store.
///
/// The `claim_for_auction`/`mark_sold` pair is the single writer path for
/// the listing status field's auction edges; implementations must make both
/// transitions atomic single-record operations.
pub trait ListingGateway: Send + Sync {
    /// Fetch one listing.
    fn get_listing(&self, id: ListingId) -> Result<Listing, GatewayError>;

    /// Atomically transition `available` → `in_auction` and return the
    /// claimed listing.
    fn claim_for_auction(&self, id: ListingId) -> Result<Listing, GatewayError>;

    /// Transition to `sold`. Idempotent.
    fn mark_sold(&self, id: ListingId) -> Result<(), GatewayError>;
}

/// Time source for lifecycle resolution and bid timestamps.
///
/// Abstracted to allow testing with deterministic time.
pub trait TimeSource: Send + Sync {
    /// Returns the current timestamp in milliseconds.
    fn now(&self) -> Timestamp;
}

/// Default system time source.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> Timestamp {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as Timestamp
    }
}

// Ports are commonly shared between the service and sibling read paths
// (e.g. the price advisor's history adapter), so every port is also
// implemented for Arc of an implementor.

impl<T: AuctionStore + ?Sized> AuctionStore for Arc<T> {
    fn load(&self, id: AuctionId) -> Result<Option<VersionedAuction>, StoreError> {
        (**self).load(id)
    }

    fn insert(&self, auction: Auction) -> Result<Version, StoreError> {
        (**self).insert(auction)
    }

    fn compare_and_store(
        &self,
        expected: Version,
        auction: Auction,
    ) -> Result<Version, StoreError> {
        (**self).compare_and_store(expected, auction)
    }

    fn all(&self) -> Result<Vec<VersionedAuction>, StoreError> {
        (**self).all()
    }
}

impl<T: ListingGateway + ?Sized> ListingGateway for Arc<T> {
    fn get_listing(&self, id: ListingId) -> Result<Listing, GatewayError> {
        (**self).get_listing(id)
    }

    fn claim_for_auction(&self, id: ListingId) -> Result<Listing, GatewayError> {
        (**self).claim_for_auction(id)
    }

    fn mark_sold(&self, id: ListingId) -> Result<(), GatewayError> {
        (**self).mark_sold(id)
    }
}

impl<T: TimeSource + ?Sized> TimeSource for Arc<T> {
    fn now(&self) -> Timestamp {
        (**self).now()
    }
}

/// Mock listing gateway for testing.
#[cfg(test)]
pub struct MockListingGateway {
    listings: parking_lot::RwLock<std::collections::HashMap<ListingId, Listing>>,
}

#[cfg(test)]
impl MockListingGateway {
    pub fn new() -> Self {
        Self {
            listings: parking_lot::RwLock::new(std::collections::HashMap::new()),
        }
    }

    pub fn with_listing(self, listing: Listing) -> Self {
        self.listings.write().insert(listing.id, listing);
        self
    }

    pub fn status_of(&self, id: ListingId) -> Option<ListingStatus> {
        self.listings.read().get(&id).map(|l| l.status)
    }
}

#[cfg(test)]
impl ListingGateway for MockListingGateway {
    fn get_listing(&self, id: ListingId) -> Result<Listing, GatewayError> {
        self.listings
            .read()
            .get(&id)
            .cloned()
            .ok_or(GatewayError::NotFound(id))
    }

    fn claim_for_auction(&self, id: ListingId) -> Result<Listing, GatewayError> {
        let mut listings = self.listings.write();
        let listing = listings.get_mut(&id).ok_or(GatewayError::NotFound(id))?;
        if listing.status != ListingStatus::Available {
            return Err(GatewayError::NotAvailable {
                id,
                status: listing.status,
            });
        }
        listing.status = ListingStatus::InAuction;
        Ok(listing.clone())
    }

    fn mark_sold(&self, id: ListingId) -> Result<(), GatewayError> {
        let mut listings = self.listings.write();
        let listing = listings.get_mut(&id).ok_or(GatewayError::NotFound(id))?;
        listing.status = ListingStatus::Sold;
        Ok(())
    }
}
