//! Static per-species price estimates.
//!
//! Used only when a category query matches neither a closed sale nor a
//! live listing. Prices are whole currency units per kilogram.

use shared_types::Amount;

/// Known species and their baseline market estimates.
const SPECIES_ESTIMATES: &[(&str, Amount)] = &[
    ("rohu", 160),
    ("catla", 180),
    ("pomfret", 500),
    ("hilsa", 700),
    ("surmai", 500),
    ("rawas", 400),
    ("bangda", 160),
    ("prawns", 500),
    ("shrimp", 400),
    ("crab", 600),
    ("tuna", 350),
    ("salmon", 900),
    ("tilapia", 120),
    ("mackerel", 180),
    ("sardine", 100),
];

/// Baseline estimate for a category query.
///
/// Matching is case-insensitive substring in either direction, so both
/// "silver pomfret" and "pomf" resolve to the pomfret entry. Unknown
/// categories get `generic_estimate`.
pub fn estimate(category: &str, generic_estimate: Amount) -> Amount {
    let query = category.trim().to_lowercase();
    SPECIES_ESTIMATES
        .iter()
        .find(|(species, _)| query.contains(species) || species.contains(query.as_str()))
        .map(|(_, price)| *price)
        .unwrap_or(generic_estimate)
}
