//! Advisor configuration.

/// Tunables for the price advisor.
#[derive(Clone, Debug)]
pub struct AdvisorConfig {
    /// How many closed sales (most recent first) feed the suggestion.
    pub history_window: usize,
    /// How many recent winning amounts appear in stats and summaries.
    pub recent_sales: usize,
    /// Weight of the average winning bid in the blended suggestion.
    pub final_bid_weight: f64,
    /// Weight of the average asking price in the blended suggestion.
    pub base_price_weight: f64,
    /// Estimate for categories absent from the fallback table.
    pub generic_estimate: shared_types::Amount,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            history_window: 30,
            recent_sales: 5,
            final_bid_weight: 0.7,
            base_price_weight: 0.3,
            generic_estimate: 200,
        }
    }
}
