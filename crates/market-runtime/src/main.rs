//! # Harborbid Market Node
//!
//! Runs a self-contained market simulation: seeds the listing store, opens
//! an auction, lets concurrent bidders fight over it, fast-forwards past
//! the deadline, and prints the outcome alongside the advisor's view.
//!
//! Expiry is entirely access-driven, so the simulation advances a manual
//! clock instead of sleeping; the flow exercised here is exactly the
//! production flow.

use anyhow::{Context, Result};
use hb_auction_ledger::{AuctionApi, AuctionError, ManualClock, SystemTimeSource, TimeSource};
use hb_listing_store::{ListingStoreApi, NewListing};
use hb_price_advisor::PriceAdvisorApi;
use market_runtime::MarketNode;
use rand::Rng;
use shared_types::{Amount, Listing};
use std::sync::Arc;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;
use uuid::Uuid;

const BIDDERS: &[&str] = &["Asha", "Binod", "Chitra", "Deven"];

#[tokio::main]
async fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("setting tracing subscriber")?;

    // Start the simulated clock at the real current time so logged
    // timestamps look sane.
    let node = MarketNode::with_clock(ManualClock::new(SystemTimeSource.now()));
    info!("market node wired");

    let seller = Uuid::new_v4();
    let catch = seed_catch(&node, seller)?;
    info!(listings = catch.len(), "seeded today's catch");

    let auction = node
        .ledger
        .create_auction(catch[0].id, Some(5))
        .await
        .context("opening auction")?;
    info!(
        auction = %auction.id,
        category = %catch[0].category,
        starting_price = auction.starting_price,
        "auction open"
    );

    let mut bidders = Vec::new();
    for name in BIDDERS {
        let ledger = node.ledger.clone();
        let auction_id = auction.id;
        let starting = auction.starting_price;
        let name = name.to_string();
        bidders.push(tokio::spawn(async move {
            run_bidder(ledger, auction_id, name, starting).await
        }));
    }
    for handle in bidders {
        handle.await.context("bidder task panicked")?;
    }

    // Past the deadline; the next access settles the auction and marks
    // the listing sold.
    node.clock.advance(6 * 60_000);
    let settled = node
        .ledger
        .read_auction(auction.id)
        .await
        .context("settling auction")?;
    match &settled.winner {
        Some(winner) => info!(
            winner = %winner.bidder_name,
            final_amount = settled.winning_amount,
            bids = settled.bids.len(),
            "auction settled"
        ),
        None => info!("auction settled with no bids"),
    }

    let suggestion = node
        .advisor
        .suggest_price(&catch[0].category)
        .await
        .context("price suggestion")?;
    info!(
        category = %suggestion.category,
        suggested = suggestion.suggested,
        confidence = ?suggestion.confidence,
        trend = ?suggestion.trend,
        "advisor suggestion"
    );

    let summary = node.advisor.market_summary().await.context("market summary")?;
    info!(
        listings = summary.listing_count,
        open = summary.counts.open,
        closed = summary.counts.closed,
        recent_revenue = summary.recent_revenue,
        "market summary"
    );

    Ok(())
}

fn seed_catch(node: &MarketNode<ManualClock>, seller: Uuid) -> Result<Vec<Listing>> {
    let catch = [
        ("Pomfret", 18.0, 450),
        ("Hilsa", 9.5, 700),
        ("Mackerel", 30.0, 180),
        ("Crab", 6.0, 600),
    ];
    catch
        .iter()
        .map(|(category, quantity_kg, base_price)| {
            node.listings
                .create_listing(NewListing {
                    owner_id: seller,
                    category: category.to_string(),
                    quantity_kg: *quantity_kg,
                    base_price: *base_price,
                    photo_url: None,
                })
                .context("seeding listing")
        })
        .collect()
}

/// One bidder: keeps raising until priced out or the auction ends.
async fn run_bidder(
    ledger: Arc<market_runtime::container::MarketLedger<ManualClock>>,
    auction_id: shared_types::AuctionId,
    name: String,
    starting_price: Amount,
) {
    let bidder_id = Uuid::new_v4();
    let budget = starting_price + rand::thread_rng().gen_range(40..200);
    let mut amount = starting_price + rand::thread_rng().gen_range(5..30);

    loop {
        if amount > budget {
            info!(bidder = %name, budget, "priced out");
            return;
        }
        match ledger
            .place_bid(auction_id, bidder_id, name.clone(), amount)
            .await
        {
            Ok(auction) => {
                info!(bidder = %name, amount, "bid accepted");
                // Someone may outbid later; poll again from their level.
                amount = auction.winning_amount + rand::thread_rng().gen_range(5..30);
                tokio::task::yield_now().await;
            }
            Err(AuctionError::BidTooLow { current }) => {
                amount = current + rand::thread_rng().gen_range(1..20);
            }
            Err(AuctionError::AuctionEnded { .. } | AuctionError::AuctionNotActive { .. }) => {
                info!(bidder = %name, "auction over");
                return;
            }
            Err(err) => {
                warn!(bidder = %name, %err, "bid failed");
                return;
            }
        }
    }
}
