//! The market node container.
//!
//! Owns the shared in-memory adapters and injects them into the subsystem
//! services. Everything is `Arc`-shared so the ledger, the advisor, and
//! callers all observe the same records.

use crate::adapters::{ListingStoreGateway, MarketViewAdapter};
use hb_auction_ledger::{
    AuctionLedgerService, InMemoryAuctionStore, LedgerConfig, SystemTimeSource, TimeSource,
};
use hb_listing_store::InMemoryListingStore;
use hb_price_advisor::PriceAdvisorService;
use std::sync::Arc;

/// The advisor's joined view over both stores.
pub type MarketView<T> =
    MarketViewAdapter<Arc<InMemoryAuctionStore>, InMemoryListingStore, Arc<T>>;

/// The node's ledger service, concrete over the in-memory adapters.
pub type MarketLedger<T> = AuctionLedgerService<
    Arc<InMemoryAuctionStore>,
    ListingStoreGateway<InMemoryListingStore>,
    Arc<T>,
>;

/// The node's advisor service.
pub type MarketAdvisor<T> = PriceAdvisorService<Arc<MarketView<T>>, Arc<MarketView<T>>>;

/// One fully wired market node.
pub struct MarketNode<T: TimeSource = SystemTimeSource> {
    pub listings: Arc<InMemoryListingStore>,
    pub auctions: Arc<InMemoryAuctionStore>,
    pub clock: Arc<T>,
    pub ledger: Arc<MarketLedger<T>>,
    pub advisor: Arc<MarketAdvisor<T>>,
}

impl MarketNode<SystemTimeSource> {
    /// Wire a node against the system clock.
    pub fn new() -> Self {
        Self::with_clock(SystemTimeSource)
    }
}

impl Default for MarketNode<SystemTimeSource> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: TimeSource> MarketNode<T> {
    /// Wire a node against a caller-supplied clock. Tests and simulations
    /// pass a `ManualClock` to control expiry deterministically.
    pub fn with_clock(clock: T) -> Self {
        Self::with_config(clock, LedgerConfig::default())
    }

    pub fn with_config(clock: T, config: LedgerConfig) -> Self {
        let clock = Arc::new(clock);
        let listings = Arc::new(InMemoryListingStore::new());
        let auctions = Arc::new(InMemoryAuctionStore::new());

        let ledger = Arc::new(AuctionLedgerService::with_config(
            auctions.clone(),
            ListingStoreGateway::new(listings.clone()),
            clock.clone(),
            config,
        ));
        let view = Arc::new(MarketViewAdapter::new(
            auctions.clone(),
            listings.clone(),
            clock.clone(),
        ));
        let advisor = Arc::new(PriceAdvisorService::new(view.clone(), view));

        Self {
            listings,
            auctions,
            clock,
            ledger,
            advisor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hb_auction_ledger::{AuctionApi, AuctionStatus, ManualClock};
    use hb_listing_store::{ListingStoreApi, NewListing};
    use hb_price_advisor::PriceAdvisorApi;
    use shared_types::ListingStatus;
    use uuid::Uuid;

    #[tokio::test]
    async fn test_node_shares_one_set_of_records() {
        let node = MarketNode::with_clock(ManualClock::new(0));
        let listing = node
            .listings
            .create_listing(NewListing {
                owner_id: Uuid::new_v4(),
                category: "Mackerel".to_string(),
                quantity_kg: 12.0,
                base_price: 180,
                photo_url: None,
            })
            .unwrap();

        let auction = node.ledger.create_auction(listing.id, Some(5)).await.unwrap();
        assert_eq!(
            node.listings.get(listing.id).unwrap().status,
            ListingStatus::InAuction
        );

        node.ledger
            .place_bid(auction.id, Uuid::new_v4(), "Asha".to_string(), 220)
            .await
            .unwrap();

        // Expiry observed through the ledger settles the listing too.
        node.clock.advance(6 * 60_000);
        let settled = node.ledger.read_auction(auction.id).await.unwrap();
        assert_eq!(settled.status, AuctionStatus::Closed);
        assert_eq!(
            node.listings.get(listing.id).unwrap().status,
            ListingStatus::Sold
        );

        // And the advisor sees the sale.
        let suggestion = node.advisor.suggest_price("mackerel").await.unwrap();
        let stats = suggestion.stats.unwrap();
        assert_eq!(stats.auction_count, 1);
        assert_eq!(stats.recent_sales, vec![220]);
    }
}
