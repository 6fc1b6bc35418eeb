//! Ledger configuration.

/// Configuration for the auction ledger service.
#[derive(Clone, Debug)]
pub struct LedgerConfig {
    /// Auction duration applied when the seller does not specify one.
    pub default_duration_minutes: u64,
    /// How many times a lost compare-and-store race is retried internally
    /// before surfacing `ConcurrentModification`.
    pub max_write_retries: u32,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            default_duration_minutes: 5,
            max_write_retries: 3,
        }
    }
}
