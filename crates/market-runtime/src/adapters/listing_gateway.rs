//! Listing gateway adapter.
//!
//! Implements the auction ledger's `ListingGateway` port on top of the
//! listing store's own API, so the ledger crate never depends on the
//! listing store crate directly.

use hb_auction_ledger::{GatewayError, ListingGateway};
use hb_listing_store::{ListingStoreApi, ListingStoreError};
use shared_types::{Listing, ListingId};
use std::sync::Arc;

/// Bridges the ledger's listing port to the listing store.
pub struct ListingStoreGateway<L: ListingStoreApi> {
    store: Arc<L>,
}

impl<L: ListingStoreApi> ListingStoreGateway<L> {
    pub fn new(store: Arc<L>) -> Self {
        Self { store }
    }
}

fn gateway_err(err: ListingStoreError) -> GatewayError {
    match err {
        ListingStoreError::NotFound(id) => GatewayError::NotFound(id),
        ListingStoreError::NotAvailable { id, status } => GatewayError::NotAvailable { id, status },
        ListingStoreError::Unavailable(reason) => GatewayError::Unavailable(reason),
        // Validation errors cannot come out of get/claim/mark.
        other => GatewayError::Unavailable(other.to_string()),
    }
}

impl<L: ListingStoreApi> ListingGateway for ListingStoreGateway<L> {
    fn get_listing(&self, id: ListingId) -> Result<Listing, GatewayError> {
        self.store.get(id).map_err(gateway_err)
    }

    fn claim_for_auction(&self, id: ListingId) -> Result<Listing, GatewayError> {
        self.store.claim_for_auction(id).map_err(gateway_err)
    }

    fn mark_sold(&self, id: ListingId) -> Result<(), GatewayError> {
        self.store.mark_sold(id).map_err(gateway_err)
    }
}
