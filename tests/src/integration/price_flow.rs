//! # Price Advisory Flow
//!
//! The advisor reading real settlement history off a wired node: weighted
//! suggestions, confidence grading, trend, and the market summary.

#[cfg(test)]
mod tests {
    use hb_auction_ledger::{AuctionApi, ManualClock};
    use hb_listing_store::{ListingStoreApi, NewListing};
    use hb_price_advisor::{AdvisorError, Confidence, PriceAdvisorApi, Trend};
    use market_runtime::MarketNode;
    use shared_types::{Amount, Listing};
    use uuid::Uuid;

    const MINUTE_MS: u64 = 60_000;

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

    /// Run one listing through a full auction settling at `final_bid`.
    async fn settle_sale(node: &MarketNode<ManualClock>, category: &str, final_bid: Amount) {
        let listing = seed(node, category, 460);
        let auction = node.ledger.create_auction(listing.id, Some(1)).await.unwrap();
        node.ledger
            .place_bid(auction.id, Uuid::new_v4(), "Asha".to_string(), final_bid)
            .await
            .unwrap();
        node.clock.advance(2 * MINUTE_MS);
        node.ledger.read_auction(auction.id).await.unwrap();
    }

    #[tokio::test]
    async fn test_suggestion_blends_history_and_asking_prices() {
        let node = MarketNode::with_clock(ManualClock::new(0));

        // Five pomfret sales, oldest 530 down to newest 500, all from
        // listings asking 460. Two unsold listings ask 450 and 470.
        for final_bid in [530u64, 510, 480, 520, 500] {
            settle_sale(&node, "Pomfret", final_bid).await;
        }
        seed(&node, "Pomfret", 450);
        seed(&node, "Pomfret", 470);

        let suggestion = node.advisor.suggest_price("pomfret").await.unwrap();
        // avg finals 508, avg asking (5x460 + 450 + 470)/7 = 460:
        // round(0.7 * 508 + 0.3 * 460) = 494.
        assert_eq!(suggestion.suggested, 494);
        assert_eq!(suggestion.confidence, Confidence::High);
        // Newest sale (500) below the oldest (530).
        assert_eq!(suggestion.trend, Trend::Falling);

        let stats = suggestion.stats.unwrap();
        assert_eq!(stats.auction_count, 5);
        assert_eq!(stats.listing_count, 7);
        assert_eq!(stats.min, 450);
        assert_eq!(stats.max, 530);
        assert_eq!(stats.recent_sales, vec![500, 520, 480, 510, 530]);
    }

    #[tokio::test]
    async fn test_unknown_market_falls_back_to_species_table() {
        let node = MarketNode::with_clock(ManualClock::new(0));

        let suggestion = node.advisor.suggest_price("salmon").await.unwrap();
        assert_eq!(suggestion.suggested, 900);
        assert_eq!(suggestion.confidence, Confidence::Low);
        assert!(suggestion.stats.is_none());

        assert!(matches!(
            node.advisor.suggest_price("x").await,
            Err(AdvisorError::CategoryTooShort(_))
        ));
    }

    #[tokio::test]
    async fn test_advisor_sees_expiry_before_ledger_settles_it() {
        let node = MarketNode::with_clock(ManualClock::new(0));
        let listing = seed(&node, "Mackerel", 180);
        let auction = node.ledger.create_auction(listing.id, Some(1)).await.unwrap();
        node.ledger
            .place_bid(auction.id, Uuid::new_v4(), "Binod".to_string(), 210)
            .await
            .unwrap();

        // No ledger access after expiry; the advisor's view still counts
        // the sale.
        node.clock.advance(5 * MINUTE_MS);
        let suggestion = node.advisor.suggest_price("mackerel").await.unwrap();
        let stats = suggestion.stats.unwrap();
        assert_eq!(stats.auction_count, 1);
        assert_eq!(stats.recent_sales, vec![210]);
    }

    #[tokio::test]
    async fn test_market_summary_over_settled_node() {
        let node = MarketNode::with_clock(ManualClock::new(0));
        settle_sale(&node, "Tuna", 380).await;
        settle_sale(&node, "Crab", 660).await;
        let open = seed(&node, "Hilsa", 700);
        node.ledger.create_auction(open.id, Some(30)).await.unwrap();

        let summary = node.advisor.market_summary().await.unwrap();
        assert_eq!(summary.listing_count, 3);
        assert_eq!(summary.counts.total, 3);
        assert_eq!(summary.counts.open, 1);
        assert_eq!(summary.counts.closed, 2);
        assert_eq!(summary.recent_sales.len(), 2);
        assert_eq!(summary.recent_revenue, 380 + 660);
        // Newest first.
        assert_eq!(summary.recent_sales[0].category, "Crab");
        assert_eq!(
            summary.recent_sales[0].winner_name.as_deref(),
            Some("Asha")
        );
    }
}
