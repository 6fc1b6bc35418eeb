//! # Price Advisor
//!
//! Read-only advisory service over the market's sale history. Given a catch
//! category it produces a suggested price blended from recent winning bids
//! and current asking prices, with a confidence grade and a coarse trend.
//!
//! The advisor never writes: it observes auctions and listings through two
//! outbound ports (`SaleHistory`, `ListingCatalog`) and does pure arithmetic
//! on what they return. When a category has no history at all the suggestion
//! falls back to a static per-species estimate.
//!
//! ## Suggestion model
//!
//! With `F` the winning amounts of matched closed auctions (most recent
//! first, capped) and `B` the asking prices of matched listings:
//!
//! - both non-empty: `round(0.7 * avg(F) + 0.3 * avg(B))`
//! - one empty: the rounded average of the other
//! - both empty: fallback table lookup
//!
//! Confidence grades on the number of matched auctions only; trend compares
//! the newest and oldest entries of the capped window.

pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

pub use application::service::PriceAdvisorService;
pub use config::AdvisorConfig;
pub use domain::errors::AdvisorError;
pub use domain::value_objects::{
    ClosedSale, Confidence, MarketCounts, MarketSummary, PriceStats, PriceSuggestion, Trend,
};
pub use ports::inbound::PriceAdvisorApi;
pub use ports::outbound::{HistoryError, ListingCatalog, SaleHistory};
