//! In-memory listing store.

use crate::errors::ListingStoreError;
use crate::ports::inbound::{ListingStoreApi, NewListing};
use crate::ports::outbound::{SystemTimeSource, TimeSource};
use parking_lot::RwLock;
use shared_types::{Listing, ListingId, ListingStatus, UserId};
use std::collections::HashMap;
use uuid::Uuid;

/// In-memory listing store.
///
/// Every operation takes the record map lock for the duration of a single
/// record's read or write, which makes the `claim_for_auction` transition
/// atomic with respect to concurrent claimers.
pub struct InMemoryListingStore<TS: TimeSource = SystemTimeSource> {
    clock: TS,
    records: RwLock<HashMap<ListingId, Listing>>,
}

impl InMemoryListingStore<SystemTimeSource> {
    /// Create an empty store on the system clock.
    pub fn new() -> Self {
        Self::with_clock(SystemTimeSource)
    }
}

impl Default for InMemoryListingStore<SystemTimeSource> {
    fn default() -> Self {
        Self::new()
    }
}

impl<TS: TimeSource> InMemoryListingStore<TS> {
    /// Create an empty store on the given clock.
    pub fn with_clock(clock: TS) -> Self {
        Self {
            clock,
            records: RwLock::new(HashMap::new()),
        }
    }

    fn sorted_newest_first(mut listings: Vec<Listing>) -> Vec<Listing> {
        listings.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(a.id.cmp(&b.id)));
        listings
    }
}

impl<TS: TimeSource> ListingStoreApi for InMemoryListingStore<TS> {
    fn create_listing(&self, new: NewListing) -> Result<Listing, ListingStoreError> {
        if !(new.quantity_kg > 0.0) {
            return Err(ListingStoreError::InvalidQuantity {
                quantity_kg: new.quantity_kg,
            });
        }
        if new.base_price == 0 {
            return Err(ListingStoreError::InvalidBasePrice {
                base_price: new.base_price,
            });
        }
        if new.category.trim().is_empty() {
            return Err(ListingStoreError::EmptyCategory);
        }

        let listing = Listing {
            id: Uuid::new_v4(),
            owner_id: new.owner_id,
            category: new.category.trim().to_string(),
            quantity_kg: new.quantity_kg,
            base_price: new.base_price,
            photo_url: new.photo_url.unwrap_or_default(),
            status: ListingStatus::Available,
            created_at: self.clock.now(),
        };

        self.records.write().insert(listing.id, listing.clone());
        tracing::debug!(listing_id = %listing.id, category = %listing.category, "Listing created");
        Ok(listing)
    }

    fn get(&self, id: ListingId) -> Result<Listing, ListingStoreError> {
        self.records
            .read()
            .get(&id)
            .cloned()
            .ok_or(ListingStoreError::NotFound(id))
    }

    fn listings_by_owner(&self, owner_id: UserId) -> Result<Vec<Listing>, ListingStoreError> {
        let listings = self
            .records
            .read()
            .values()
            .filter(|l| l.owner_id == owner_id)
            .cloned()
            .collect();
        Ok(Self::sorted_newest_first(listings))
    }

    fn open_listings(&self) -> Result<Vec<Listing>, ListingStoreError> {
        let listings = self
            .records
            .read()
            .values()
            .filter(|l| matches!(l.status, ListingStatus::Available | ListingStatus::InAuction))
            .cloned()
            .collect();
        Ok(Self::sorted_newest_first(listings))
    }

    fn matching(&self, category: &str) -> Result<Vec<Listing>, ListingStoreError> {
        let needle = category.trim().to_lowercase();
        let listings = self
            .records
            .read()
            .values()
            .filter(|l| l.category.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        Ok(Self::sorted_newest_first(listings))
    }

    fn listing_count(&self) -> Result<usize, ListingStoreError> {
        Ok(self.records.read().len())
    }

    fn claim_for_auction(&self, id: ListingId) -> Result<Listing, ListingStoreError> {
        let mut records = self.records.write();
        let listing = records.get_mut(&id).ok_or(ListingStoreError::NotFound(id))?;

        if listing.status != ListingStatus::Available {
            return Err(ListingStoreError::NotAvailable {
                id,
                status: listing.status,
            });
        }

        listing.status = ListingStatus::InAuction;
        tracing::debug!(listing_id = %id, "Listing claimed for auction");
        Ok(listing.clone())
    }

    fn mark_sold(&self, id: ListingId) -> Result<(), ListingStoreError> {
        let mut records = self.records.write();
        let listing = records.get_mut(&id).ok_or(ListingStoreError::NotFound(id))?;

        if listing.status != ListingStatus::Sold {
            listing.status = ListingStatus::Sold;
            tracing::debug!(listing_id = %id, "Listing marked sold");
        }
        Ok(())
    }
}
