//! Inbound (driving) port: the advisor API.

use crate::domain::errors::AdvisorError;
use crate::domain::value_objects::{MarketSummary, PriceSuggestion};
use async_trait::async_trait;

/// Public advisory interface.
#[async_trait]
pub trait PriceAdvisorApi: Send + Sync {
    /// Suggest a price for a catch category.
    ///
    /// ## Errors
    /// - `CategoryTooShort` for queries under two characters.
    /// - `HistoryUnavailable` if the backing stores cannot be read.
    async fn suggest_price(&self, category: &str) -> Result<PriceSuggestion, AdvisorError>;

    /// Snapshot of overall market activity.
    ///
    /// ## Errors
    /// - `HistoryUnavailable` if the backing stores cannot be read.
    async fn market_summary(&self) -> Result<MarketSummary, AdvisorError>;
}
