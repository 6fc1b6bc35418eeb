//! Value objects returned by the ledger API.

use super::entities::{Auction, AuctionStatus, WinnerRef};
use serde::{Deserialize, Serialize};
use shared_types::{Amount, AuctionId, ListingId, Timestamp};

/// Final (or current terminal) state of an auction, attached to rejections
/// so callers can show the outcome instead of a bare error.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuctionOutcome {
    pub auction_id: AuctionId,
    pub status: AuctionStatus,
    pub winning_amount: Amount,
    pub winner: Option<WinnerRef>,
}

impl AuctionOutcome {
    pub fn of(auction: &Auction) -> Self {
        Self {
            auction_id: auction.id,
            status: auction.status,
            winning_amount: auction.winning_amount,
            winner: auction.winner.clone(),
        }
    }
}

/// A bidder's standing in one auction they participated in.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BidderStanding {
    pub auction_id: AuctionId,
    pub listing_id: ListingId,
    /// The bidder's own highest accepted bid.
    pub my_highest_bid: Amount,
    /// The auction's winning amount (final if closed).
    pub winning_amount: Amount,
    pub status: AuctionStatus,
    /// True only when the auction closed with this bidder holding the
    /// winning bid.
    pub is_winner: bool,
    pub close_deadline: Timestamp,
}

/// Auction counts for market overview queries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AuctionCounts {
    pub total: usize,
    pub open: usize,
    pub closed: usize,
    pub cancelled: usize,
}
