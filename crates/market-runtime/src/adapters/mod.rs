//! Port adapters connecting the subsystem crates.

pub mod listing_gateway;
pub mod market_view;

pub use listing_gateway::ListingStoreGateway;
pub use market_view::MarketViewAdapter;
