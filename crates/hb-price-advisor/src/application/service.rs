//! The price advisor service.

use crate::config::AdvisorConfig;
use crate::domain::errors::AdvisorError;
use crate::domain::value_objects::{Confidence, MarketSummary, PriceSuggestion, Trend};
use crate::domain::{fallback, suggestion};
use crate::ports::inbound::PriceAdvisorApi;
use crate::ports::outbound::{HistoryError, ListingCatalog, SaleHistory};
use async_trait::async_trait;
use shared_types::Amount;
use tracing::{debug, info};

/// Advisor over a sale history and a listing catalog.
pub struct PriceAdvisorService<H: SaleHistory, C: ListingCatalog> {
    history: H,
    catalog: C,
    config: AdvisorConfig,
}

impl<H: SaleHistory, C: ListingCatalog> PriceAdvisorService<H, C> {
    pub fn new(history: H, catalog: C) -> Self {
        Self::with_config(history, catalog, AdvisorConfig::default())
    }

    pub fn with_config(history: H, catalog: C, config: AdvisorConfig) -> Self {
        Self {
            history,
            catalog,
            config,
        }
    }

    pub fn config(&self) -> &AdvisorConfig {
        &self.config
    }
}

fn history_err(err: HistoryError) -> AdvisorError {
    match err {
        HistoryError::Unavailable(reason) => AdvisorError::HistoryUnavailable(reason),
    }
}

#[async_trait]
impl<H: SaleHistory, C: ListingCatalog> PriceAdvisorApi for PriceAdvisorService<H, C> {
    async fn suggest_price(&self, category: &str) -> Result<PriceSuggestion, AdvisorError> {
        let query = category.trim();
        if query.chars().count() < 2 {
            return Err(AdvisorError::CategoryTooShort(category.to_string()));
        }

        let sales = self
            .history
            .closed_sales(query, self.config.history_window)
            .map_err(history_err)?;
        let finals: Vec<Amount> = sales.iter().map(|s| s.final_amount).collect();
        let bases = self.catalog.base_prices(query).map_err(history_err)?;

        let suggested = match suggestion::blended_suggestion(
            &finals,
            &bases,
            self.config.final_bid_weight,
            self.config.base_price_weight,
        ) {
            Some(amount) => amount,
            None => {
                // Nothing matched; fall back to the static estimate.
                let estimate = fallback::estimate(query, self.config.generic_estimate);
                debug!(
                    category = %query,
                    estimate,
                    "no market data, using fallback estimate"
                );
                return Ok(PriceSuggestion {
                    category: category.to_string(),
                    suggested: estimate,
                    confidence: Confidence::Low,
                    trend: Trend::Stable,
                    stats: None,
                });
            }
        };

        let suggestion = PriceSuggestion {
            category: category.to_string(),
            suggested,
            confidence: suggestion::confidence(finals.len()),
            trend: suggestion::trend(&finals),
            stats: suggestion::stats(&finals, &bases, self.config.recent_sales),
        };
        info!(
            category = %query,
            suggested,
            matched_auctions = finals.len(),
            matched_listings = bases.len(),
            "price suggestion computed"
        );
        Ok(suggestion)
    }

    async fn market_summary(&self) -> Result<MarketSummary, AdvisorError> {
        let counts = self.history.auction_counts().map_err(history_err)?;
        let recent_sales = self
            .history
            .recent_sales(self.config.recent_sales)
            .map_err(history_err)?;
        let listing_count = self.catalog.listing_count().map_err(history_err)?;

        // No-bid closures carry no revenue.
        let recent_revenue = recent_sales
            .iter()
            .filter(|s| s.winner_name.is_some())
            .map(|s| s.final_amount)
            .sum();

        Ok(MarketSummary {
            listing_count,
            counts,
            recent_sales,
            recent_revenue,
        })
    }
}
