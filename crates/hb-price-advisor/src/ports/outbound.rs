//! Outbound (driven) ports for the advisor.
//!
//! Both ports are read-only views; adapters in the runtime crate join the
//! auction ledger and listing store to implement them.

use crate::domain::value_objects::{ClosedSale, MarketCounts};
use shared_types::Amount;
use std::sync::Arc;
use thiserror::Error;

/// History read error type.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum HistoryError {
    /// Backing stores unreachable or timed out.
    #[error("History unavailable: {0}")]
    Unavailable(String),
}

/// Settled-auction history.
///
/// Category matching is case-insensitive substring; results come back
/// newest first, already capped at `limit`.
pub trait SaleHistory: Send + Sync {
    /// Closed sales whose listing category matches `category`.
    fn closed_sales(&self, category: &str, limit: usize) -> Result<Vec<ClosedSale>, HistoryError>;

    /// Most recent closed sales across all categories.
    fn recent_sales(&self, limit: usize) -> Result<Vec<ClosedSale>, HistoryError>;

    /// Auction population counts.
    fn auction_counts(&self) -> Result<MarketCounts, HistoryError>;
}

/// Current listing inventory.
pub trait ListingCatalog: Send + Sync {
    /// Asking prices of listings whose category matches `category`
    /// (case-insensitive substring).
    fn base_prices(&self, category: &str) -> Result<Vec<Amount>, HistoryError>;

    /// Total listings ever created, sold included.
    fn listing_count(&self) -> Result<usize, HistoryError>;
}

impl<T: SaleHistory + ?Sized> SaleHistory for Arc<T> {
    fn closed_sales(&self, category: &str, limit: usize) -> Result<Vec<ClosedSale>, HistoryError> {
        (**self).closed_sales(category, limit)
    }

    fn recent_sales(&self, limit: usize) -> Result<Vec<ClosedSale>, HistoryError> {
        (**self).recent_sales(limit)
    }

    fn auction_counts(&self) -> Result<MarketCounts, HistoryError> {
        (**self).auction_counts()
    }
}

impl<T: ListingCatalog + ?Sized> ListingCatalog for Arc<T> {
    fn base_prices(&self, category: &str) -> Result<Vec<Amount>, HistoryError> {
        (**self).base_prices(category)
    }

    fn listing_count(&self) -> Result<usize, HistoryError> {
        (**self).listing_count()
    }
}

/// In-memory history for testing, pre-loaded with fixed sales.
#[cfg(test)]
pub struct MockMarketView {
    pub sales: Vec<ClosedSale>,
    pub listings: Vec<(String, Amount)>,
    pub counts: MarketCounts,
}

#[cfg(test)]
impl MockMarketView {
    pub fn empty() -> Self {
        Self {
            sales: Vec::new(),
            listings: Vec::new(),
            counts: MarketCounts::default(),
        }
    }

    fn matches(category: &str, query: &str) -> bool {
        category.to_lowercase().contains(&query.to_lowercase())
    }
}

#[cfg(test)]
impl SaleHistory for MockMarketView {
    fn closed_sales(&self, category: &str, limit: usize) -> Result<Vec<ClosedSale>, HistoryError> {
        Ok(self
            .sales
            .iter()
            .filter(|s| Self::matches(&s.category, category))
            .take(limit)
            .cloned()
            .collect())
    }

    fn recent_sales(&self, limit: usize) -> Result<Vec<ClosedSale>, HistoryError> {
        Ok(self.sales.iter().take(limit).cloned().collect())
    }

    fn auction_counts(&self) -> Result<MarketCounts, HistoryError> {
        Ok(self.counts)
    }
}

#[cfg(test)]
impl ListingCatalog for MockMarketView {
    fn base_prices(&self, category: &str) -> Result<Vec<Amount>, HistoryError> {
        Ok(self
            .listings
            .iter()
            .filter(|(c, _)| Self::matches(c, category))
            .map(|(_, p)| *p)
            .collect())
    }

    fn listing_count(&self) -> Result<usize, HistoryError> {
        Ok(self.listings.len())
    }
}
