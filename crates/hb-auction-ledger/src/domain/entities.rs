//! Core domain entities for the auction ledger.

use serde::{Deserialize, Serialize};
use shared_types::{Amount, AuctionId, Listing, ListingId, Timestamp, UserId};
use uuid::Uuid;

/// Status of an auction.
///
/// `Closed` and `Cancelled` are terminal; no write reaches a terminal
/// auction except reads.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AuctionStatus {
    /// Accepting bids until the close deadline.
    #[default]
    Open,
    /// The time window elapsed. Terminal.
    Closed,
    /// Withdrawn administratively. Terminal; rejects bids like `Closed`.
    Cancelled,
}

impl AuctionStatus {
    /// True for `Closed` and `Cancelled`.
    pub fn is_terminal(self) -> bool {
        matches!(self, AuctionStatus::Closed | AuctionStatus::Cancelled)
    }
}

/// The bidder currently holding the winning amount.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinnerRef {
    pub bidder_id: UserId,
    pub bidder_name: String,
}

/// An accepted bid. Immutable once appended.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bid {
    pub bidder_id: UserId,
    pub bidder_name: String,
    /// Strictly greater than the winning amount at acceptance time.
    pub amount: Amount,
    pub placed_at: Timestamp,
}

/// One auction record: price state, bid history, time window, status.
///
/// Invariants:
/// - `winning_amount == max(bid.amount)`, or `starting_price` if no bids
/// - `winner` matches the bid that produced `winning_amount`, or is `None`
/// - `bids` is append-only
/// - `close_deadline` and `starting_price` are immutable once set
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Auction {
    pub id: AuctionId,
    /// The listing under auction (owning reference, 1:1 for the auction's
    /// lifetime).
    pub listing_id: ListingId,
    pub seller_id: UserId,
    /// Copied from the listing's base price at open time.
    pub starting_price: Amount,
    /// Highest accepted bid so far; monotonically non-decreasing.
    pub winning_amount: Amount,
    pub winner: Option<WinnerRef>,
    /// Ordered, append-only bid history.
    pub bids: Vec<Bid>,
    pub open_time: Timestamp,
    pub close_deadline: Timestamp,
    pub status: AuctionStatus,
    /// Set when the auction leaves `Open`. For expiry this is the close
    /// deadline (the logical end of the window), not the access time that
    /// happened to observe it.
    pub closed_at: Option<Timestamp>,
}

impl Auction {
    /// Open a new auction over a listing.
    pub fn open(listing: &Listing, now: Timestamp, close_deadline: Timestamp) -> Self {
        Self {
            id: Uuid::new_v4(),
            listing_id: listing.id,
            seller_id: listing.owner_id,
            starting_price: listing.base_price,
            winning_amount: listing.base_price,
            winner: None,
            bids: Vec::new(),
            open_time: now,
            close_deadline,
            status: AuctionStatus::Open,
            closed_at: None,
        }
    }

    /// True while the auction accepts bids (ignoring the clock).
    pub fn is_open(&self) -> bool {
        self.status == AuctionStatus::Open
    }

    /// True when the time window has elapsed on a still-open record.
    /// A bid arriving exactly at the deadline is still in the window.
    pub fn has_expired(&self, now: Timestamp) -> bool {
        self.is_open() && now > self.close_deadline
    }

    /// Append an accepted bid and advance the winning pointer.
    ///
    /// The caller must have validated `bid.amount > self.winning_amount`;
    /// this method only records the result.
    pub fn accept_bid(&mut self, bid: Bid) {
        debug_assert!(bid.amount > self.winning_amount);
        self.winning_amount = bid.amount;
        self.winner = Some(WinnerRef {
            bidder_id: bid.bidder_id,
            bidder_name: bid.bidder_name.clone(),
        });
        self.bids.push(bid);
    }

    /// The highest bid a given bidder has placed on this auction, if any.
    pub fn highest_bid_by(&self, bidder_id: UserId) -> Option<Amount> {
        self.bids
            .iter()
            .filter(|b| b.bidder_id == bidder_id)
            .map(|b| b.amount)
            .max()
    }

    /// Checks the winning-amount invariant. Test support.
    pub fn winning_invariant_holds(&self) -> bool {
        let expected = self
            .bids
            .iter()
            .map(|b| b.amount)
            .max()
            .unwrap_or(self.starting_price);
        let winner_matches = match (&self.winner, self.bids.iter().rev().find(|b| b.amount == self.winning_amount)) {
            (None, _) => self.bids.is_empty(),
            (Some(w), Some(bid)) => w.bidder_id == bid.bidder_id,
            (Some(_), None) => false,
        };
        self.winning_amount == expected && winner_matches
    }
}
