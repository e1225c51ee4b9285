//! Boundary adapter between the negotiation engine and the bid UI.
//!
//! Translates engine state into the shapes the listing-detail view and the
//! seller's bid inbox render, and forwards their actions. The `can_submit`
//! affordance here duplicates the state machine's own pending-bid guard for
//! form gating; the state machine enforces it independently.

use crate::bid::BidStatus;
use crate::error::BidError;
use crate::negotiation::{BidAcceptance, BidNegotiation};
use crate::repository::{BidRepository, ListingRepository};
use mart_commerce::ids::{BidId, ListingId, UserId};
use mart_commerce::money::Money;
use serde::{Deserialize, Serialize};

/// One row of the seller's bid inbox.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BidInboxEntry {
    /// Bid identifier, used for accept/decline actions.
    pub bid_id: BidId,
    /// The listing the bid is on.
    pub listing_id: ListingId,
    /// Listing title.
    pub product_title: String,
    /// Offered amount, formatted for display (e.g., "$40.00").
    pub amount: String,
    /// Buyer display name.
    pub bidder: String,
    /// Unix timestamp of submission.
    pub submitted_at: i64,
    /// Relative label (e.g., "2 days ago").
    pub submitted_label: String,
    /// Current bid status.
    pub status: BidStatus,
}

/// What the listing-detail bid form needs to render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingBidView {
    /// The listing.
    pub listing_id: ListingId,
    /// Asking price, formatted for display.
    pub asking_price: String,
    /// The current (most recent) bid amount, formatted, if any.
    pub current_bid: Option<String>,
    /// Whether this buyer already has a pending bid.
    pub has_pending_bid: bool,
    /// Whether the bid form should be enabled.
    pub can_submit_bid: bool,
}

/// UI-facing facade over [`BidNegotiation`].
#[derive(Debug, Clone, Default)]
pub struct ListingBiddingGateway<L, B> {
    engine: BidNegotiation<L, B>,
}

impl<L: ListingRepository, B: BidRepository> ListingBiddingGateway<L, B> {
    /// Wrap a negotiation engine.
    pub fn new(engine: BidNegotiation<L, B>) -> Self {
        Self { engine }
    }

    /// The underlying engine.
    pub fn engine(&self) -> &BidNegotiation<L, B> {
        &self.engine
    }

    /// Submit a buyer's offer from the listing-detail form.
    pub fn submit_offer(
        &mut self,
        listing_id: &ListingId,
        bidder: &UserId,
        bidder_name: impl Into<String>,
        amount: Money,
    ) -> Result<BidInboxEntry, BidError> {
        let bid = self.engine.submit_bid(listing_id, bidder, bidder_name, amount)?;
        let title = self.engine.listings().listing(listing_id)?.title;
        Ok(entry(bid, title, bid_now()))
    }

    /// Accept a bid from the inbox.
    pub fn accept(&mut self, bid_id: &BidId) -> Result<BidAcceptance, BidError> {
        self.engine.accept_bid(bid_id)
    }

    /// Decline a bid from the inbox, with optional reason and counter-offer.
    pub fn decline(
        &mut self,
        bid_id: &BidId,
        reason: Option<String>,
        counter_offer: Option<Money>,
    ) -> Result<(), BidError> {
        self.engine.decline_bid(bid_id, reason, counter_offer)?;
        Ok(())
    }

    /// All bids across listings for the inbox, newest first.
    ///
    /// `now` is supplied by the caller so relative labels are deterministic.
    pub fn inbox(&self, now: i64) -> Vec<BidInboxEntry> {
        // walk the submission-ordered store newest first, so the stable
        // sort keeps submission recency for same-second timestamps
        let mut entries: Vec<BidInboxEntry> = self
            .engine
            .bids()
            .all_bids()
            .into_iter()
            .rev()
            .map(|bid| {
                let title = self
                    .engine
                    .listings()
                    .listing(&bid.listing_id)
                    .map(|l| l.title)
                    .unwrap_or_default();
                entry(bid, title, now)
            })
            .collect();
        entries.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));
        entries
    }

    /// Bids on one listing, newest first.
    pub fn inbox_for_listing(&self, listing_id: &ListingId, now: i64) -> Vec<BidInboxEntry> {
        let mut entries: Vec<BidInboxEntry> = match self.engine.listings().listing(listing_id) {
            Ok(listing) => self
                .engine
                .bids()
                .bids_for_listing(listing_id)
                .into_iter()
                .rev()
                .map(|bid| entry(bid, listing.title.clone(), now))
                .collect(),
            Err(_) => Vec::new(),
        };
        entries.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));
        entries
    }

    /// View model for the listing-detail bid form.
    pub fn listing_view(
        &self,
        listing_id: &ListingId,
        viewer: &UserId,
    ) -> Result<ListingBidView, BidError> {
        let listing = self.engine.listings().listing(listing_id)?;
        let has_pending_bid = self.engine.has_pending_bid(listing_id, viewer);
        Ok(ListingBidView {
            listing_id: listing_id.clone(),
            asking_price: listing.asking_price.display(),
            current_bid: self.engine.current_bid(listing_id).map(|b| b.amount.display()),
            has_pending_bid,
            can_submit_bid: listing.allows_bidding && !has_pending_bid,
        })
    }
}

fn entry(bid: crate::bid::Bid, product_title: String, now: i64) -> BidInboxEntry {
    BidInboxEntry {
        bid_id: bid.id,
        listing_id: bid.listing_id,
        product_title,
        amount: bid.amount.display(),
        bidder: bid.bidder_name,
        submitted_at: bid.created_at,
        submitted_label: time_ago(now, bid.created_at),
        status: bid.status,
    }
}

fn bid_now() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

/// Relative-time label for inbox rows.
pub fn time_ago(now: i64, then: i64) -> String {
    let elapsed = (now - then).max(0);
    match elapsed {
        0..=59 => "just now".to_string(),
        60..=3_599 => {
            let minutes = elapsed / 60;
            format!("{} minute{} ago", minutes, plural(minutes))
        }
        3_600..=86_399 => {
            let hours = elapsed / 3_600;
            format!("{} hour{} ago", hours, plural(hours))
        }
        _ => {
            let days = elapsed / 86_400;
            format!("{} day{} ago", days, plural(days))
        }
    }
}

fn plural(n: i64) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::Listing;
    use crate::repository::{InMemoryBidRepository, InMemoryListingRepository};
    use mart_commerce::ids::SellerId;

    fn gateway() -> ListingBiddingGateway<InMemoryListingRepository, InMemoryBidRepository> {
        let mut listings = InMemoryListingRepository::new();
        listings.put(Listing::new(
            ListingId::new("lst-1"),
            "Textbook for CS2800",
            SellerId::new("sel-1"),
            Money::from_cents(5000),
            true,
        ));
        listings.put(Listing::new(
            ListingId::new("lst-2"),
            "MacBook Pro",
            SellerId::new("sel-2"),
            Money::from_cents(90_000),
            false,
        ));
        ListingBiddingGateway::new(BidNegotiation::new(listings, InMemoryBidRepository::new()))
    }

    #[test]
    fn test_listing_view_gates_form_on_pending_bid() {
        let mut gw = gateway();
        let listing = ListingId::new("lst-1");
        let buyer = UserId::new("usr-1");

        let view = gw.listing_view(&listing, &buyer).unwrap();
        assert!(view.can_submit_bid);
        assert!(!view.has_pending_bid);
        assert_eq!(view.current_bid, None);

        gw.submit_offer(&listing, &buyer, "Jane Smith", Money::from_cents(4000))
            .unwrap();

        let view = gw.listing_view(&listing, &buyer).unwrap();
        assert!(view.has_pending_bid);
        assert!(!view.can_submit_bid);
        assert_eq!(view.current_bid.as_deref(), Some("$40.00"));
    }

    #[test]
    fn test_listing_view_disabled_when_bidding_off() {
        let gw = gateway();
        let view = gw
            .listing_view(&ListingId::new("lst-2"), &UserId::new("usr-1"))
            .unwrap();
        assert!(!view.can_submit_bid);
        assert!(!view.has_pending_bid);
    }

    #[test]
    fn test_inbox_entry_shape() {
        let mut gw = gateway();
        let entry = gw
            .submit_offer(
                &ListingId::new("lst-1"),
                &UserId::new("usr-1"),
                "Jane Smith",
                Money::from_cents(4000),
            )
            .unwrap();

        assert_eq!(entry.product_title, "Textbook for CS2800");
        assert_eq!(entry.amount, "$40.00");
        assert_eq!(entry.bidder, "Jane Smith");
        assert_eq!(entry.status, BidStatus::Pending);
    }

    #[test]
    fn test_inbox_newest_first() {
        let mut gw = gateway();
        let listing = ListingId::new("lst-1");
        let first = gw
            .submit_offer(&listing, &UserId::new("usr-1"), "Jane Smith", Money::from_cents(4000))
            .unwrap();
        gw.decline(&first.bid_id, None, None).unwrap();
        gw.submit_offer(&listing, &UserId::new("usr-2"), "John Doe", Money::from_cents(4200))
            .unwrap();

        let inbox = gw.inbox(bid_now());
        assert_eq!(inbox.len(), 2);
        assert!(inbox[0].submitted_at >= inbox[1].submitted_at);
    }

    #[test]
    fn test_inbox_same_second_bids_newest_first() {
        use crate::bid::Bid;

        // second-granularity timestamps tie; submission recency must win
        let mut listings = InMemoryListingRepository::new();
        listings.put(Listing::new(
            ListingId::new("lst-1"),
            "Textbook for CS2800",
            SellerId::new("sel-1"),
            Money::from_cents(5000),
            true,
        ));
        let mut bids = InMemoryBidRepository::new();
        let first = Bid::new(
            ListingId::new("lst-1"),
            UserId::new("usr-1"),
            "Jane Smith",
            Money::from_cents(4000),
            1_700_000_000,
        );
        let second = Bid::new(
            ListingId::new("lst-1"),
            UserId::new("usr-2"),
            "John Doe",
            Money::from_cents(4200),
            1_700_000_000,
        );
        bids.insert(first.clone());
        bids.insert(second.clone());
        let gw = ListingBiddingGateway::new(BidNegotiation::new(listings, bids));

        let inbox = gw.inbox(1_700_000_100);
        assert_eq!(inbox[0].bid_id, second.id);
        assert_eq!(inbox[1].bid_id, first.id);

        let per_listing = gw.inbox_for_listing(&ListingId::new("lst-1"), 1_700_000_100);
        assert_eq!(per_listing[0].bid_id, second.id);
        assert_eq!(per_listing[1].bid_id, first.id);
    }

    #[test]
    fn test_time_ago_labels() {
        let now = 1_700_000_000;
        assert_eq!(time_ago(now, now - 30), "just now");
        assert_eq!(time_ago(now, now - 60), "1 minute ago");
        assert_eq!(time_ago(now, now - 600), "10 minutes ago");
        assert_eq!(time_ago(now, now - 3_600), "1 hour ago");
        assert_eq!(time_ago(now, now - 2 * 86_400), "2 days ago");
        // clock skew never yields a negative label
        assert_eq!(time_ago(now, now + 100), "just now");
    }
}
