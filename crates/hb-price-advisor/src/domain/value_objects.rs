//! Value objects returned by the advisor API.

use serde::{Deserialize, Serialize};
use shared_types::{Amount, AuctionId, Timestamp};

/// How much weight the caller should give a suggestion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    /// Fewer than two matched sales, or fallback-table only.
    Low,
    /// Two to four matched sales.
    Medium,
    /// Five or more matched sales.
    High,
}

/// Direction of recent winning amounts for a category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Rising,
    Falling,
    Stable,
}

/// Aggregate price statistics backing a suggestion.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PriceStats {
    /// Mean over winning amounts and asking prices combined.
    pub average: Amount,
    pub min: Amount,
    pub max: Amount,
    /// Closed auctions matched by the category query.
    pub auction_count: usize,
    /// Listings matched by the category query.
    pub listing_count: usize,
    /// Most recent matched winning amounts, newest first.
    pub recent_sales: Vec<Amount>,
}

/// A price suggestion for one category query.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PriceSuggestion {
    /// The query as received.
    pub category: String,
    pub suggested: Amount,
    pub confidence: Confidence,
    pub trend: Trend,
    /// Absent when the suggestion came from the fallback table.
    pub stats: Option<PriceStats>,
}

/// One settled auction as the advisor sees it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClosedSale {
    pub auction_id: AuctionId,
    pub category: String,
    pub final_amount: Amount,
    /// None when the auction closed without bids.
    pub winner_name: Option<String>,
    pub closed_at: Timestamp,
}

/// Auction population counts for the market summary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MarketCounts {
    pub total: usize,
    pub open: usize,
    pub closed: usize,
}

/// Snapshot of overall market activity.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MarketSummary {
    pub listing_count: usize,
    pub counts: MarketCounts,
    /// Most recent settled sales, newest first.
    pub recent_sales: Vec<ClosedSale>,
    /// Summed final amounts of `recent_sales`.
    pub recent_revenue: Amount,
}
