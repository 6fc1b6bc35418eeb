//! # Auction Flow Integration
//!
//! End-to-end flows over a wired `MarketNode`: listing creation, auction
//! opening, bidding, and access-driven settlement, all on a manual clock.

#[cfg(test)]
mod tests {
    use hb_auction_ledger::{AuctionApi, AuctionError, AuctionStatus, ManualClock};
    use hb_listing_store::{ListingStoreApi, NewListing};
    use market_runtime::MarketNode;
    use shared_types::{Amount, Listing, ListingStatus, UserId};
    use uuid::Uuid;

    const MINUTE_MS: u64 = 60_000;

    fn node() -> MarketNode<ManualClock> {
        MarketNode::with_clock(ManualClock::new(0))
    }

    fn seed(node: &MarketNode<ManualClock>, owner_id: UserId, category: &str, base_price: Amount) -> Listing {
        node.listings
            .create_listing(NewListing {
                owner_id,
                category: category.to_string(),
                quantity_kg: 10.0,
                base_price,
                photo_url: None,
            })
            .unwrap()
    }

    #[tokio::test]
    async fn test_listing_to_settled_sale() {
        let node = node();
        let seller = Uuid::new_v4();
        let listing = seed(&node, seller, "Pomfret", 450);

        let auction = node.ledger.create_auction(listing.id, Some(5)).await.unwrap();
        assert_eq!(auction.starting_price, 450);
        assert_eq!(auction.close_deadline, 5 * MINUTE_MS);
        assert_eq!(
            node.listings.get(listing.id).unwrap().status,
            ListingStatus::InAuction
        );

        let asha = Uuid::new_v4();
        let binod = Uuid::new_v4();
        node.ledger
            .place_bid(auction.id, asha, "Asha".to_string(), 480)
            .await
            .unwrap();
        node.ledger
            .place_bid(auction.id, binod, "Binod".to_string(), 520)
            .await
            .unwrap();

        // Undercutting the current winner is rejected with the bar to beat.
        assert_eq!(
            node.ledger
                .place_bid(auction.id, asha, "Asha".to_string(), 500)
                .await,
            Err(AuctionError::BidTooLow { current: 520 })
        );

        node.clock.advance(6 * MINUTE_MS);
        let settled = node.ledger.read_auction(auction.id).await.unwrap();
        assert_eq!(settled.status, AuctionStatus::Closed);
        assert_eq!(settled.winning_amount, 520);
        assert_eq!(settled.winner.as_ref().unwrap().bidder_id, binod);
        // Settlement stamps the deadline, not the observation time.
        assert_eq!(settled.closed_at, Some(5 * MINUTE_MS));
        assert_eq!(
            node.listings.get(listing.id).unwrap().status,
            ListingStatus::Sold
        );
    }

    #[tokio::test]
    async fn test_no_bid_auction_still_settles() {
        let node = node();
        let listing = seed(&node, Uuid::new_v4(), "Sardine", 100);
        let auction = node.ledger.create_auction(listing.id, None).await.unwrap();

        node.clock.advance(10 * MINUTE_MS);
        let settled = node.ledger.read_auction(auction.id).await.unwrap();
        assert_eq!(settled.status, AuctionStatus::Closed);
        assert!(settled.winner.is_none());
        assert_eq!(settled.winning_amount, 100);
        assert_eq!(
            node.listings.get(listing.id).unwrap().status,
            ListingStatus::Sold
        );
    }

    #[tokio::test]
    async fn test_bid_at_deadline_accepted_after_rejected() {
        let node = node();
        let listing = seed(&node, Uuid::new_v4(), "Tuna", 350);
        let auction = node.ledger.create_auction(listing.id, Some(5)).await.unwrap();
        let buyer = Uuid::new_v4();

        // Exactly at the deadline the window is still open.
        node.clock.set(5 * MINUTE_MS);
        node.ledger
            .place_bid(auction.id, buyer, "Asha".to_string(), 400)
            .await
            .unwrap();

        // One tick later it is not; the rejection carries the outcome.
        node.clock.advance(1);
        match node
            .ledger
            .place_bid(auction.id, buyer, "Asha".to_string(), 500)
            .await
        {
            Err(AuctionError::AuctionEnded { outcome }) => {
                assert_eq!(outcome.winning_amount, 400);
                assert_eq!(outcome.status, AuctionStatus::Closed);
            }
            other => panic!("expected AuctionEnded, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_listing_auctioned_once_at_a_time() {
        let node = node();
        let listing = seed(&node, Uuid::new_v4(), "Crab", 600);
        let auction = node.ledger.create_auction(listing.id, Some(5)).await.unwrap();

        assert!(matches!(
            node.ledger.create_auction(listing.id, Some(5)).await,
            Err(AuctionError::AlreadyInAuction {
                status: ListingStatus::InAuction,
                ..
            })
        ));

        // Sold listings stay rejected after settlement.
        node.clock.advance(6 * MINUTE_MS);
        node.ledger.read_auction(auction.id).await.unwrap();
        assert!(matches!(
            node.ledger.create_auction(listing.id, Some(5)).await,
            Err(AuctionError::AlreadyInAuction {
                status: ListingStatus::Sold,
                ..
            })
        ));
    }

    #[tokio::test]
    async fn test_cancelled_auction_rejects_bids_and_keeps_listing() {
        let node = node();
        let listing = seed(&node, Uuid::new_v4(), "Hilsa", 700);
        let auction = node.ledger.create_auction(listing.id, Some(5)).await.unwrap();

        let cancelled = node.ledger.cancel_auction(auction.id).await.unwrap();
        assert_eq!(cancelled.status, AuctionStatus::Cancelled);

        assert!(matches!(
            node.ledger
                .place_bid(auction.id, Uuid::new_v4(), "Asha".to_string(), 750)
                .await,
            Err(AuctionError::AuctionNotActive { .. })
        ));
        // Cancellation is not a sale.
        assert_eq!(
            node.listings.get(listing.id).unwrap().status,
            ListingStatus::InAuction
        );
    }

    #[tokio::test]
    async fn test_seller_and_bidder_views() {
        let node = node();
        let seller = Uuid::new_v4();
        let first = seed(&node, seller, "Mackerel", 180);
        let second = seed(&node, seller, "Rawas", 400);

        let a1 = node.ledger.create_auction(first.id, Some(2)).await.unwrap();
        node.clock.advance(1_000);
        let a2 = node.ledger.create_auction(second.id, Some(10)).await.unwrap();

        let asha = Uuid::new_v4();
        node.ledger
            .place_bid(a1.id, asha, "Asha".to_string(), 200)
            .await
            .unwrap();
        node.ledger
            .place_bid(a2.id, asha, "Asha".to_string(), 420)
            .await
            .unwrap();
        node.ledger
            .place_bid(a2.id, Uuid::new_v4(), "Binod".to_string(), 460)
            .await
            .unwrap();

        // First auction expires; second stays live.
        node.clock.set(5 * MINUTE_MS);
        let live = node.ledger.live_auctions().await.unwrap();
        assert_eq!(live.len(), 1);
        assert_eq!(live[0].id, a2.id);

        let mine = node.ledger.auctions_by_seller(seller).await.unwrap();
        assert_eq!(mine.len(), 2);
        // Newest first.
        assert_eq!(mine[0].id, a2.id);

        let standings = node.ledger.bidder_standings(asha).await.unwrap();
        assert_eq!(standings.len(), 2);
        let won = standings.iter().find(|s| s.auction_id == a1.id).unwrap();
        assert!(won.is_winner);
        assert_eq!(won.my_highest_bid, 200);
        let outbid = standings.iter().find(|s| s.auction_id == a2.id).unwrap();
        assert!(!outbid.is_winner);
        assert_eq!(outbid.winning_amount, 460);
    }
}
