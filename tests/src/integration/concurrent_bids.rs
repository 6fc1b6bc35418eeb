//! # Concurrent Bidding
//!
//! Bid storms against one auction and races across auctions. The property
//! under test: whatever interleaving happens, the persisted winning amount
//! is the maximum accepted bid and accepted bids are strictly increasing.

#[cfg(test)]
mod tests {
    use hb_auction_ledger::{AuctionApi, AuctionError, LedgerConfig, ManualClock};
    use hb_listing_store::{ListingStoreApi, NewListing};
    use market_runtime::MarketNode;
    use rand::Rng;
    use shared_types::{Amount, Listing};
    use uuid::Uuid;

    fn storm_node() -> MarketNode<ManualClock> {
        // Enough retry budget that no bidder gives up under contention;
        // correctness is asserted on the persisted record either way.
        MarketNode::with_config(
            ManualClock::new(0),
            LedgerConfig {
                max_write_retries: 64,
                ..LedgerConfig::default()
            },
        )
    }

    fn seed(node: &MarketNode<ManualClock>, category: &str, base_price: Amount) -> Listing {
        node.listings
            .create_listing(NewListing {
                owner_id: Uuid::new_v4(),
                category: category.to_string(),
                quantity_kg: 10.0,
                base_price,
                photo_url: None,
            })
            .unwrap()
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn test_bid_storm_winning_amount_is_max_accepted() {
        let node = storm_node();
        let listing = seed(&node, "Pomfret", 450);
        let auction = node.ledger.create_auction(listing.id, Some(5)).await.unwrap();

        let mut tasks = Vec::new();
        for bidder in 0..8u32 {
            let ledger = node.ledger.clone();
            let auction_id = auction.id;
            tasks.push(tokio::spawn(async move {
                let bidder_id = Uuid::new_v4();
                let name = format!("bidder-{bidder}");
                let mut amount = 450 + rand::thread_rng().gen_range(1..50);
                for _ in 0..20 {
                    match ledger
                        .place_bid(auction_id, bidder_id, name.clone(), amount)
                        .await
                    {
                        Ok(auction) => {
                            amount = auction.winning_amount + rand::thread_rng().gen_range(1..10);
                        }
                        Err(AuctionError::BidTooLow { current }) => {
                            amount = current + rand::thread_rng().gen_range(1..10);
                        }
                        Err(other) => panic!("unexpected bid failure: {other:?}"),
                    }
                }
            }));
        }
        for task in tasks {
            task.await.unwrap();
        }

        let settled = node.ledger.read_auction(auction.id).await.unwrap();
        assert!(!settled.bids.is_empty());

        // Strictly increasing accepted sequence, each above the start.
        let mut previous = settled.starting_price;
        for bid in &settled.bids {
            assert!(bid.amount > previous, "bid {} not above {}", bid.amount, previous);
            previous = bid.amount;
        }

        let max = settled.bids.iter().map(|b| b.amount).max().unwrap();
        assert_eq!(settled.winning_amount, max);
        let winner = settled.winner.unwrap();
        let top = settled.bids.last().unwrap();
        assert_eq!(winner.bidder_id, top.bidder_id);
        assert_eq!(settled.winning_amount, top.amount);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_same_amount_race_admits_exactly_one() {
        let node = storm_node();
        let listing = seed(&node, "Crab", 600);
        let auction = node.ledger.create_auction(listing.id, Some(5)).await.unwrap();

        let mut tasks = Vec::new();
        for bidder in 0..6u32 {
            let ledger = node.ledger.clone();
            let auction_id = auction.id;
            tasks.push(tokio::spawn(async move {
                ledger
                    .place_bid(auction_id, Uuid::new_v4(), format!("bidder-{bidder}"), 650)
                    .await
            }));
        }
        let mut accepted = 0;
        let mut too_low = 0;
        for task in tasks {
            match task.await.unwrap() {
                Ok(_) => accepted += 1,
                Err(AuctionError::BidTooLow { current }) => {
                    assert_eq!(current, 650);
                    too_low += 1;
                }
                Err(other) => panic!("unexpected bid failure: {other:?}"),
            }
        }
        assert_eq!(accepted, 1);
        assert_eq!(too_low, 5);

        let state = node.ledger.read_auction(auction.id).await.unwrap();
        assert_eq!(state.bids.len(), 1);
        assert_eq!(state.winning_amount, 650);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_create_race_claims_listing_once() {
        let node = storm_node();
        let listing = seed(&node, "Hilsa", 700);

        let mut tasks = Vec::new();
        for _ in 0..6 {
            let ledger = node.ledger.clone();
            let listing_id = listing.id;
            tasks.push(tokio::spawn(async move {
                ledger.create_auction(listing_id, Some(5)).await
            }));
        }
        let mut opened = 0;
        for task in tasks {
            match task.await.unwrap() {
                Ok(_) => opened += 1,
                Err(AuctionError::AlreadyInAuction { .. }) => {}
                Err(other) => panic!("unexpected create failure: {other:?}"),
            }
        }
        assert_eq!(opened, 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_independent_auctions_do_not_contend() {
        let node = storm_node();
        let first = seed(&node, "Tuna", 350);
        let second = seed(&node, "Rawas", 400);
        let a1 = node.ledger.create_auction(first.id, Some(5)).await.unwrap();
        let a2 = node.ledger.create_auction(second.id, Some(5)).await.unwrap();

        let mut tasks = Vec::new();
        for (auction_id, start) in [(a1.id, 350u64), (a2.id, 400u64)] {
            for step in 1..=10u64 {
                let ledger = node.ledger.clone();
                tasks.push(tokio::spawn(async move {
                    // Distinct amounts per auction, so every bid either
                    // lands or loses to a strictly higher one.
                    ledger
                        .place_bid(
                            auction_id,
                            Uuid::new_v4(),
                            "walk-in".to_string(),
                            start + step,
                        )
                        .await
                }));
            }
        }
        for task in tasks {
            match task.await.unwrap() {
                Ok(_) | Err(AuctionError::BidTooLow { .. }) => {}
                Err(other) => panic!("unexpected bid failure: {other:?}"),
            }
        }

        let s1 = node.ledger.read_auction(a1.id).await.unwrap();
        let s2 = node.ledger.read_auction(a2.id).await.unwrap();
        assert_eq!(s1.winning_amount, 360);
        assert_eq!(s2.winning_amount, 410);
        assert!(s1.bids.iter().all(|b| b.amount <= 360));
        assert!(s2.bids.iter().all(|b| b.amount > 400 && b.amount <= 410));
    }
}
