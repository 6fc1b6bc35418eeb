//! Auction ledger error types.
//!
//! Every failure path returns a distinguishable kind rather than a generic
//! message, so callers can branch on it.

use super::value_objects::AuctionOutcome;
use shared_types::{Amount, AuctionId, ListingId, ListingStatus};
use thiserror::Error;

/// Auction ledger error type.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum AuctionError {
    /// Referenced auction does not exist. Not retried.
    #[error("Auction not found: {0}")]
    AuctionNotFound(AuctionId),

    /// Referenced listing does not exist. Not retried.
    #[error("Listing not found: {0}")]
    ListingNotFound(ListingId),

    /// Listing is not `available` at auction creation; the caller must pick
    /// another listing. No mutation was performed.
    #[error("Listing {id} is already in an auction (status: {status:?})")]
    AlreadyInAuction { id: ListingId, status: ListingStatus },

    /// The auction's time window elapsed during this very call; the closing
    /// transition was persisted even though the bid was rejected.
    #[error("Auction has ended at {}", outcome.winning_amount)]
    AuctionEnded { outcome: AuctionOutcome },

    /// The auction was already closed or cancelled by a prior call.
    #[error("Auction is not active (status: {:?})", outcome.status)]
    AuctionNotActive { outcome: AuctionOutcome },

    /// Bid did not exceed the current winning amount. Expected to recur
    /// until the caller raises the bid; the ledger is unchanged.
    #[error("Bid must be higher than {current}")]
    BidTooLow { current: Amount },

    /// Lost the compare-and-store race more times than the internal retry
    /// budget allows.
    #[error("Concurrent modification on auction {auction_id}")]
    ConcurrentModification { auction_id: AuctionId },

    /// Backing store unreachable or timed out. Safe to retry.
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),
}
