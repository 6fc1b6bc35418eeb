//! Advisor read-path adapter.
//!
//! Implements the price advisor's `SaleHistory` and `ListingCatalog` ports
//! by joining the auction store with the listing store. Reads apply
//! lifecycle resolution to each snapshot without persisting it, so an
//! expired auction counts as closed here even before a ledger access has
//! settled it.

use hb_auction_ledger::domain::lifecycle;
use hb_auction_ledger::{Auction, AuctionStatus, AuctionStore, StoreError, TimeSource};
use hb_listing_store::{ListingStoreApi, ListingStoreError};
use hb_price_advisor::{ClosedSale, HistoryError, ListingCatalog, MarketCounts, SaleHistory};
use shared_types::Amount;
use std::sync::Arc;

/// Read-only market view over the auction and listing stores.
pub struct MarketViewAdapter<S: AuctionStore, L: ListingStoreApi, T: TimeSource> {
    auctions: S,
    listings: Arc<L>,
    clock: T,
}

impl<S: AuctionStore, L: ListingStoreApi, T: TimeSource> MarketViewAdapter<S, L, T> {
    pub fn new(auctions: S, listings: Arc<L>, clock: T) -> Self {
        Self {
            auctions,
            listings,
            clock,
        }
    }

    /// All auction snapshots with expiry applied, view-only.
    fn resolved(&self) -> Result<Vec<Auction>, HistoryError> {
        let now = self.clock.now();
        Ok(self
            .auctions
            .all()
            .map_err(store_err)?
            .into_iter()
            .map(|record| {
                lifecycle::resolve(&record.auction, now).unwrap_or(record.auction)
            })
            .collect())
    }

    /// Closed auctions joined with their listing's category, newest first.
    /// Auctions whose listing has vanished are skipped.
    fn closed_with_category(&self) -> Result<Vec<ClosedSale>, HistoryError> {
        let mut sales: Vec<(ClosedSale, Auction)> = Vec::new();
        for auction in self.resolved()? {
            if auction.status != AuctionStatus::Closed {
                continue;
            }
            let category = match self.listings.get(auction.listing_id) {
                Ok(listing) => listing.category,
                Err(ListingStoreError::NotFound(_)) => continue,
                Err(other) => return Err(catalog_err(other)),
            };
            let sale = ClosedSale {
                auction_id: auction.id,
                category,
                final_amount: auction.winning_amount,
                winner_name: auction.winner.as_ref().map(|w| w.bidder_name.clone()),
                closed_at: auction.closed_at.unwrap_or(auction.close_deadline),
            };
            sales.push((sale, auction));
        }
        sales.sort_by(|(a, aa), (b, ba)| {
            b.closed_at.cmp(&a.closed_at).then(aa.id.cmp(&ba.id))
        });
        Ok(sales.into_iter().map(|(sale, _)| sale).collect())
    }
}

fn store_err(err: StoreError) -> HistoryError {
    HistoryError::Unavailable(err.to_string())
}

fn catalog_err(err: ListingStoreError) -> HistoryError {
    HistoryError::Unavailable(err.to_string())
}

fn matches(category: &str, query: &str) -> bool {
    category.to_lowercase().contains(&query.to_lowercase())
}

impl<S: AuctionStore, L: ListingStoreApi, T: TimeSource> SaleHistory
    for MarketViewAdapter<S, L, T>
{
    fn closed_sales(&self, category: &str, limit: usize) -> Result<Vec<ClosedSale>, HistoryError> {
        let mut sales = self.closed_with_category()?;
        sales.retain(|s| matches(&s.category, category));
        sales.truncate(limit);
        Ok(sales)
    }

    fn recent_sales(&self, limit: usize) -> Result<Vec<ClosedSale>, HistoryError> {
        let mut sales = self.closed_with_category()?;
        sales.truncate(limit);
        Ok(sales)
    }

    fn auction_counts(&self) -> Result<MarketCounts, HistoryError> {
        let mut counts = MarketCounts::default();
        for auction in self.resolved()? {
            counts.total += 1;
            match auction.status {
                AuctionStatus::Open => counts.open += 1,
                AuctionStatus::Closed => counts.closed += 1,
                AuctionStatus::Cancelled => {}
            }
        }
        Ok(counts)
    }
}

impl<S: AuctionStore, L: ListingStoreApi, T: TimeSource> ListingCatalog
    for MarketViewAdapter<S, L, T>
{
    fn base_prices(&self, category: &str) -> Result<Vec<Amount>, HistoryError> {
        Ok(self
            .listings
            .matching(category)
            .map_err(catalog_err)?
            .into_iter()
            .map(|l| l.base_price)
            .collect())
    }

    fn listing_count(&self) -> Result<usize, HistoryError> {
        self.listings.listing_count().map_err(catalog_err)
    }
}
