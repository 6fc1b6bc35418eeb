pub mod auction_flow;
pub mod concurrent_bids;
pub mod price_flow;
