//! Inbound (driving) port for the auction ledger.

use crate::domain::entities::Auction;
use crate::domain::errors::AuctionError;
use crate::domain::value_objects::{AuctionCounts, BidderStanding};
use async_trait::async_trait;
use shared_types::{Amount, AuctionId, ListingId, UserId};

/// Primary API for the auction ledger.
///
/// Every operation runs lifecycle resolution before any other logic: an
/// expired-but-untouched auction self-heals to `closed` (and its listing to
/// `sold`) on the next access, whatever kind of access that is.
#[async_trait]
pub trait AuctionApi: Send + Sync {
    /// Open a time-boxed auction over an available listing.
    ///
    /// Copies the listing's base price into the starting price, claims the
    /// listing (`available` → `in_auction`), and opens the bidding window.
    /// Falls back to the configured default duration when none is given.
    ///
    /// ## Errors
    /// - `ListingNotFound`: no such listing.
    /// - `AlreadyInAuction`: listing is not `available`; nothing mutated.
    async fn create_auction(
        &self,
        listing_id: ListingId,
        duration_minutes: Option<u64>,
    ) -> Result<Auction, AuctionError>;

    /// Place a bid.
    ///
    /// Preconditions, checked in order:
    /// 1. the auction exists (`AuctionNotFound`),
    /// 2. its window has not just elapsed (`AuctionEnded`; the closing
    ///    transition is persisted even though the bid is rejected),
    /// 3. it is still open (`AuctionNotActive` for closed/cancelled),
    /// 4. the amount exceeds the current winning amount (`BidTooLow`,
    ///    carrying that amount so the caller can raise and resubmit).
    ///
    /// A lost write race is retried internally against the fresh snapshot
    /// a bounded number of times, then surfaced as
    /// `ConcurrentModification`.
    async fn place_bid(
        &self,
        auction_id: AuctionId,
        bidder_id: UserId,
        bidder_name: String,
        amount: Amount,
    ) -> Result<Auction, AuctionError>;

    /// Read one auction snapshot, resolving expiry first. This is how the
    /// open→closed transition becomes visible to passive viewers.
    async fn read_auction(&self, auction_id: AuctionId) -> Result<Auction, AuctionError>;

    /// Administratively withdraw an open auction. Terminal; a cancelled
    /// auction rejects bids like a closed one.
    ///
    /// ## Errors
    /// - `AuctionNotActive`: the auction already ended or was cancelled.
    async fn cancel_auction(&self, auction_id: AuctionId) -> Result<Auction, AuctionError>;

    /// All auctions still open after resolution, soonest deadline first.
    async fn live_auctions(&self) -> Result<Vec<Auction>, AuctionError>;

    /// A seller's auctions, newest first.
    async fn auctions_by_seller(&self, seller_id: UserId) -> Result<Vec<Auction>, AuctionError>;

    /// Per-auction standings for a bidder: their highest bid, the current
    /// winning amount, and whether they won a closed auction.
    async fn bidder_standings(
        &self,
        bidder_id: UserId,
    ) -> Result<Vec<BidderStanding>, AuctionError>;

    /// Closed auctions most-recent-first, capped at `limit`. The read path
    /// for price history.
    async fn recent_closed(&self, limit: usize) -> Result<Vec<Auction>, AuctionError>;

    /// Auction counts by status, for market overview queries.
    async fn auction_counts(&self) -> Result<AuctionCounts, AuctionError>;
}
