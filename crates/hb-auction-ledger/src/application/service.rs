//! Auction Ledger Service
//!
//! Implements `AuctionApi`: bid acceptance, lazy lifecycle resolution, and
//! the listing hand-off. All concurrency discipline lives here and in the
//! store's version check; the domain layer stays pure.

use crate::config::LedgerConfig;
use crate::domain::entities::{Auction, AuctionStatus, Bid};
use crate::domain::errors::AuctionError;
use crate::domain::lifecycle;
use crate::domain::value_objects::{AuctionCounts, AuctionOutcome, BidderStanding};
use crate::ports::inbound::AuctionApi;
use crate::ports::outbound::{
    AuctionStore, GatewayError, ListingGateway, StoreError, TimeSource, VersionedAuction,
};
use async_trait::async_trait;
use shared_types::{Amount, AuctionId, ListingId, UserId};
use tracing::{debug, info, warn};

/// The auction ledger service.
///
/// Orchestrates every inbound operation as:
/// 1. load the record,
/// 2. settle any due open→closed transition (persisting it and marking the
///    listing sold),
/// 3. run the operation's own validation,
/// 4. write through the per-record version check, revalidating on a lost
///    race.
pub struct AuctionLedgerService<S, L, T>
where
    S: AuctionStore,
    L: ListingGateway,
    T: TimeSource,
{
    store: S,
    listings: L,
    clock: T,
    config: LedgerConfig,
}

impl<S, L, T> AuctionLedgerService<S, L, T>
where
    S: AuctionStore,
    L: ListingGateway,
    T: TimeSource,
{
    /// Create a service with default configuration.
    pub fn new(store: S, listings: L, clock: T) -> Self {
        Self::with_config(store, listings, clock, LedgerConfig::default())
    }

    /// Create a service with custom configuration.
    pub fn with_config(store: S, listings: L, clock: T, config: LedgerConfig) -> Self {
        Self {
            store,
            listings,
            clock,
            config,
        }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    fn store_err(err: StoreError) -> AuctionError {
        match err {
            StoreError::NotFound(id) => AuctionError::AuctionNotFound(id),
            StoreError::VersionConflict { id, .. } => {
                AuctionError::ConcurrentModification { auction_id: id }
            }
            StoreError::Duplicate(id) => {
                AuctionError::StorageUnavailable(format!("duplicate auction id {id}"))
            }
            StoreError::Unavailable(msg) => AuctionError::StorageUnavailable(msg),
        }
    }

    fn gateway_err(err: GatewayError) -> AuctionError {
        match err {
            GatewayError::NotFound(id) => AuctionError::ListingNotFound(id),
            GatewayError::NotAvailable { id, status } => {
                AuctionError::AlreadyInAuction { id, status }
            }
            GatewayError::Unavailable(msg) => AuctionError::StorageUnavailable(msg),
        }
    }

    fn load_versioned(&self, id: AuctionId) -> Result<VersionedAuction, AuctionError> {
        self.store
            .load(id)
            .map_err(Self::store_err)?
            .ok_or(AuctionError::AuctionNotFound(id))
    }

    /// Persist any due open→closed transition for one record.
    ///
    /// Returns the current record and whether this call performed the
    /// transition. A lost race means someone else already moved the record;
    /// the fresh snapshot is re-evaluated, so settling is idempotent under
    /// contention.
    fn settle(&self, mut record: VersionedAuction) -> Result<(VersionedAuction, bool), AuctionError> {
        for _ in 0..=self.config.max_write_retries {
            let now = self.clock.now();
            let Some(closed) = lifecycle::resolve(&record.auction, now) else {
                return Ok((record, false));
            };

            match self.store.compare_and_store(record.version, closed.clone()) {
                Ok(version) => {
                    self.listings
                        .mark_sold(closed.listing_id)
                        .map_err(Self::gateway_err)?;
                    info!(
                        auction_id = %closed.id,
                        winning_amount = closed.winning_amount,
                        "Auction window elapsed; closed on access"
                    );
                    return Ok((
                        VersionedAuction {
                            auction: closed,
                            version,
                        },
                        true,
                    ));
                }
                Err(StoreError::VersionConflict { .. }) => {
                    record = self.load_versioned(record.auction.id)?;
                }
                Err(err) => return Err(Self::store_err(err)),
            }
        }

        Err(AuctionError::ConcurrentModification {
            auction_id: record.auction.id,
        })
    }

    /// Load-and-settle every record. List queries build on this so that
    /// expired auctions self-heal on any access path.
    fn settle_all(&self) -> Result<Vec<Auction>, AuctionError> {
        let mut auctions = Vec::new();
        for record in self.store.all().map_err(Self::store_err)? {
            let (record, _) = self.settle(record)?;
            auctions.push(record.auction);
        }
        Ok(auctions)
    }
}

#[async_trait]
impl<S, L, T> AuctionApi for AuctionLedgerService<S, L, T>
where
    S: AuctionStore,
    L: ListingGateway,
    T: TimeSource,
{
    async fn create_auction(
        &self,
        listing_id: ListingId,
        duration_minutes: Option<u64>,
    ) -> Result<Auction, AuctionError> {
        // The claim is the atomic gate: a listing that is not available
        // fails here before anything is written to the ledger.
        let listing = self
            .listings
            .claim_for_auction(listing_id)
            .map_err(Self::gateway_err)?;

        let now = self.clock.now();
        let minutes = duration_minutes.unwrap_or(self.config.default_duration_minutes);
        let auction = Auction::open(&listing, now, now + minutes * 60_000);

        self.store
            .insert(auction.clone())
            .map_err(Self::store_err)?;

        info!(
            auction_id = %auction.id,
            listing_id = %listing_id,
            starting_price = auction.starting_price,
            close_deadline = auction.close_deadline,
            "Auction opened"
        );
        Ok(auction)
    }

    async fn place_bid(
        &self,
        auction_id: AuctionId,
        bidder_id: UserId,
        bidder_name: String,
        amount: Amount,
    ) -> Result<Auction, AuctionError> {
        let mut lost_races = 0;
        loop {
            let record = self.load_versioned(auction_id)?;
            let (record, just_closed) = self.settle(record)?;

            if just_closed {
                // The window elapsed during this very call; the close was
                // persisted even though the bid is rejected.
                return Err(AuctionError::AuctionEnded {
                    outcome: AuctionOutcome::of(&record.auction),
                });
            }

            let VersionedAuction { auction, version } = record;

            if !auction.is_open() {
                return Err(AuctionError::AuctionNotActive {
                    outcome: AuctionOutcome::of(&auction),
                });
            }

            if amount <= auction.winning_amount {
                return Err(AuctionError::BidTooLow {
                    current: auction.winning_amount,
                });
            }

            let mut updated = auction;
            updated.accept_bid(Bid {
                bidder_id,
                bidder_name: bidder_name.clone(),
                amount,
                placed_at: self.clock.now(),
            });

            match self.store.compare_and_store(version, updated.clone()) {
                Ok(_) => {
                    info!(
                        auction_id = %auction_id,
                        bidder_id = %bidder_id,
                        amount,
                        "Bid accepted"
                    );
                    return Ok(updated);
                }
                Err(StoreError::VersionConflict { .. }) => {
                    lost_races += 1;
                    if lost_races > self.config.max_write_retries {
                        warn!(
                            auction_id = %auction_id,
                            lost_races,
                            "Giving up bid after repeated write races"
                        );
                        return Err(AuctionError::ConcurrentModification { auction_id });
                    }
                    debug!(auction_id = %auction_id, "Lost write race; revalidating bid");
                }
                Err(err) => return Err(Self::store_err(err)),
            }
        }
    }

    async fn read_auction(&self, auction_id: AuctionId) -> Result<Auction, AuctionError> {
        let record = self.load_versioned(auction_id)?;
        let (record, _) = self.settle(record)?;
        Ok(record.auction)
    }

    async fn cancel_auction(&self, auction_id: AuctionId) -> Result<Auction, AuctionError> {
        let mut lost_races = 0;
        loop {
            let record = self.load_versioned(auction_id)?;
            let (record, _) = self.settle(record)?;
            let VersionedAuction { auction, version } = record;

            if !auction.is_open() {
                return Err(AuctionError::AuctionNotActive {
                    outcome: AuctionOutcome::of(&auction),
                });
            }

            let mut cancelled = auction;
            cancelled.status = AuctionStatus::Cancelled;
            cancelled.closed_at = Some(self.clock.now());

            match self.store.compare_and_store(version, cancelled.clone()) {
                Ok(_) => {
                    info!(auction_id = %auction_id, "Auction cancelled");
                    return Ok(cancelled);
                }
                Err(StoreError::VersionConflict { .. }) => {
                    lost_races += 1;
                    if lost_races > self.config.max_write_retries {
                        return Err(AuctionError::ConcurrentModification { auction_id });
                    }
                }
                Err(err) => return Err(Self::store_err(err)),
            }
        }
    }

    async fn live_auctions(&self) -> Result<Vec<Auction>, AuctionError> {
        let mut open: Vec<Auction> = self
            .settle_all()?
            .into_iter()
            .filter(Auction::is_open)
            .collect();
        open.sort_by(|a, b| a.close_deadline.cmp(&b.close_deadline).then(a.id.cmp(&b.id)));
        Ok(open)
    }

    async fn auctions_by_seller(&self, seller_id: UserId) -> Result<Vec<Auction>, AuctionError> {
        let mut auctions: Vec<Auction> = self
            .settle_all()?
            .into_iter()
            .filter(|a| a.seller_id == seller_id)
            .collect();
        auctions.sort_by(|a, b| b.open_time.cmp(&a.open_time).then(a.id.cmp(&b.id)));
        Ok(auctions)
    }

    async fn bidder_standings(
        &self,
        bidder_id: UserId,
    ) -> Result<Vec<BidderStanding>, AuctionError> {
        let mut standings: Vec<BidderStanding> = self
            .settle_all()?
            .into_iter()
            .filter_map(|auction| {
                let my_highest_bid = auction.highest_bid_by(bidder_id)?;
                let is_winner = auction.status == AuctionStatus::Closed
                    && auction
                        .winner
                        .as_ref()
                        .is_some_and(|w| w.bidder_id == bidder_id);
                Some(BidderStanding {
                    auction_id: auction.id,
                    listing_id: auction.listing_id,
                    my_highest_bid,
                    winning_amount: auction.winning_amount,
                    status: auction.status,
                    is_winner,
                    close_deadline: auction.close_deadline,
                })
            })
            .collect();
        standings.sort_by(|a, b| {
            b.close_deadline
                .cmp(&a.close_deadline)
                .then(a.auction_id.cmp(&b.auction_id))
        });
        Ok(standings)
    }

    async fn recent_closed(&self, limit: usize) -> Result<Vec<Auction>, AuctionError> {
        let mut closed: Vec<Auction> = self
            .settle_all()?
            .into_iter()
            .filter(|a| a.status == AuctionStatus::Closed)
            .collect();
        closed.sort_by(|a, b| {
            let a_at = a.closed_at.unwrap_or(a.close_deadline);
            let b_at = b.closed_at.unwrap_or(b.close_deadline);
            b_at.cmp(&a_at).then(a.id.cmp(&b.id))
        });
        closed.truncate(limit);
        Ok(closed)
    }

    async fn auction_counts(&self) -> Result<AuctionCounts, AuctionError> {
        let mut counts = AuctionCounts::default();
        for auction in self.settle_all()? {
            counts.total += 1;
            match auction.status {
                AuctionStatus::Open => counts.open += 1,
                AuctionStatus::Closed => counts.closed += 1,
                AuctionStatus::Cancelled => counts.cancelled += 1,
            }
        }
        Ok(counts)
    }
}
