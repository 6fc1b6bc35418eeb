//! Lazy lifecycle resolution.
//!
//! The system has no background scheduler: expiry is observed only on
//! access. Every public ledger operation applies [`resolve`] before any
//! other logic, so an auction past its deadline presents as closed even if
//! the stored record still says open.

use super::entities::{Auction, AuctionStatus};
use shared_types::Timestamp;

/// Evaluate an auction snapshot against the current time.
///
/// Returns the closed successor when the time window has elapsed on an open
/// auction, or `None` when no transition is due. Idempotent: resolving an
/// already-closed or cancelled auction always yields `None`.
///
/// `closed_at` is set to the close deadline, so recency ordering does not
/// depend on which access happened to observe the expiry.
pub fn resolve(auction: &Auction, now: Timestamp) -> Option<Auction> {
    if !auction.has_expired(now) {
        return None;
    }

    let mut closed = auction.clone();
    closed.status = AuctionStatus::Closed;
    closed.closed_at = Some(auction.close_deadline);
    Some(closed)
}
