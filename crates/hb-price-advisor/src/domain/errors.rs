//! Advisor error type.

use thiserror::Error;

/// Errors surfaced by the price advisor.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AdvisorError {
    /// Category queries shorter than two characters match far too broadly
    /// to produce a meaningful suggestion.
    #[error("Category query too short: {0:?} (minimum 2 characters)")]
    CategoryTooShort(String),

    /// The sale history or listing catalog could not be read.
    #[error("Sale history unavailable: {0}")]
    HistoryUnavailable(String),
}
