//! Pure suggestion arithmetic.
//!
//! All functions here take plain slices of amounts; the service is
//! responsible for fetching, matching, and capping the inputs.

use super::value_objects::{Confidence, PriceStats, Trend};
use shared_types::Amount;

fn mean(values: &[Amount]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<Amount>() as f64 / values.len() as f64)
}

/// Blend winning amounts and asking prices into one suggested price.
///
/// Returns None when both sets are empty. When only one set is non-empty
/// the suggestion is its unweighted average; otherwise the weighted blend
/// of the two averages. Rounded to the nearest whole unit exactly once.
pub fn blended_suggestion(
    finals: &[Amount],
    bases: &[Amount],
    final_weight: f64,
    base_weight: f64,
) -> Option<Amount> {
    let blended = match (mean(finals), mean(bases)) {
        (Some(f), Some(b)) => f * final_weight + b * base_weight,
        (Some(f), None) => f,
        (None, Some(b)) => b,
        (None, None) => return None,
    };
    Some(blended.round() as Amount)
}

/// Confidence grades on matched closed auctions alone; asking prices carry
/// no settlement signal.
pub fn confidence(auction_count: usize) -> Confidence {
    match auction_count {
        n if n >= 5 => Confidence::High,
        n if n >= 2 => Confidence::Medium,
        _ => Confidence::Low,
    }
}

/// Trend over a newest-first window of winning amounts.
///
/// Compares only the two endpoints of the window: rising when the newest
/// sale is strictly above the oldest, otherwise falling. Equal endpoints
/// report falling. Fewer than two sales is stable.
pub fn trend(newest_first: &[Amount]) -> Trend {
    if newest_first.len() < 2 {
        return Trend::Stable;
    }
    let newest = newest_first[0];
    let oldest = newest_first[newest_first.len() - 1];
    if newest > oldest {
        Trend::Rising
    } else {
        Trend::Falling
    }
}

/// Aggregate stats over the combined matched set.
///
/// Returns None when both sets are empty (fallback path carries no stats).
pub fn stats(finals: &[Amount], bases: &[Amount], recent_cap: usize) -> Option<PriceStats> {
    let combined: Vec<Amount> = finals.iter().chain(bases.iter()).copied().collect();
    if combined.is_empty() {
        return None;
    }
    let min = combined.iter().copied().min()?;
    let max = combined.iter().copied().max()?;
    let average = mean(&combined).map(|a| a.round() as Amount)?;
    Some(PriceStats {
        average,
        min,
        max,
        auction_count: finals.len(),
        listing_count: bases.len(),
        recent_sales: finals.iter().take(recent_cap).copied().collect(),
    })
}
