//! In-memory versioned auction store.

use crate::domain::entities::Auction;
use crate::ports::outbound::{AuctionStore, StoreError, Version, VersionedAuction};
use parking_lot::RwLock;
use shared_types::AuctionId;
use std::collections::HashMap;

/// In-memory auction store with per-record optimistic versioning.
///
/// The map lock is held only for the duration of a single record's read or
/// swap; the read-validate-write sequence of the service happens outside
/// it and is serialized per auction by the version check alone.
#[derive(Default)]
pub struct InMemoryAuctionStore {
    records: RwLock<HashMap<AuctionId, VersionedAuction>>,
}

impl InMemoryAuctionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of auctions in the store. Test support.
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    /// True if the store holds no auctions.
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

impl AuctionStore for InMemoryAuctionStore {
    fn load(&self, id: AuctionId) -> Result<Option<VersionedAuction>, StoreError> {
        Ok(self.records.read().get(&id).cloned())
    }

    fn insert(&self, auction: Auction) -> Result<Version, StoreError> {
        let mut records = self.records.write();
        if records.contains_key(&auction.id) {
            return Err(StoreError::Duplicate(auction.id));
        }
        let id = auction.id;
        records.insert(
            id,
            VersionedAuction {
                auction,
                version: 1,
            },
        );
        Ok(1)
    }

    fn compare_and_store(
        &self,
        expected: Version,
        auction: Auction,
    ) -> Result<Version, StoreError> {
        let mut records = self.records.write();
        let id = auction.id;
        let stored = records.get_mut(&id).ok_or(StoreError::NotFound(id))?;

        if stored.version != expected {
            return Err(StoreError::VersionConflict {
                id,
                expected,
                actual: stored.version,
            });
        }

        stored.auction = auction;
        stored.version += 1;
        Ok(stored.version)
    }

    fn all(&self) -> Result<Vec<VersionedAuction>, StoreError> {
        Ok(self.records.read().values().cloned().collect())
    }
}
