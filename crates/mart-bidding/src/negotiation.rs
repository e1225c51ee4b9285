//! Bid negotiation state machine.
//!
//! `Pending -> Accepted` and `Pending -> Declined`, nothing else. Declining
//! may carry an advisory counter-offer; it never creates a new bid. Every
//! rejected operation returns a typed error and leaves storage untouched —
//! silent no-ops on money-related state are unacceptable.

use crate::bid::{Bid, BidStatus};
use crate::error::BidError;
use crate::repository::{BidRepository, ListingRepository};
use mart_commerce::ids::{BidId, ListingId, UserId};
use mart_commerce::money::Money;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Window the buyer has to complete the purchase after acceptance: 5 days.
///
/// Expiry enforcement is a timer concern owned by an external collaborator;
/// the engine only reports the deadline.
pub const PURCHASE_WINDOW_SECS: i64 = 5 * 24 * 60 * 60;

/// Result of accepting a bid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BidAcceptance {
    /// The accepted bid.
    pub bid: Bid,
    /// Unix timestamp by which the buyer must complete the purchase.
    pub purchase_deadline: i64,
}

/// The negotiation engine over a listing store and a bid store.
#[derive(Debug, Clone, Default)]
pub struct BidNegotiation<L, B> {
    listings: L,
    bids: B,
}

impl<L: ListingRepository, B: BidRepository> BidNegotiation<L, B> {
    /// Create an engine over the given repositories.
    pub fn new(listings: L, bids: B) -> Self {
        Self { listings, bids }
    }

    /// The listing store.
    pub fn listings(&self) -> &L {
        &self.listings
    }

    /// The bid store.
    pub fn bids(&self) -> &B {
        &self.bids
    }

    /// Submit a buyer's offer on a listing.
    ///
    /// Validation order: listing exists, listing allows bidding, no pending
    /// bid from this buyer, amount strictly positive and strictly below the
    /// asking price. On success the new Pending bid is appended and becomes
    /// the listing's current bid for display purposes.
    pub fn submit_bid(
        &mut self,
        listing_id: &ListingId,
        bidder: &UserId,
        bidder_name: impl Into<String>,
        amount: Money,
    ) -> Result<Bid, BidError> {
        let listing = self.listings.listing(listing_id)?;

        if !listing.allows_bidding {
            warn!(listing = %listing_id, "bid rejected: listing does not allow bidding");
            return Err(BidError::BiddingNotAllowed(listing_id.clone()));
        }

        if self.bids.pending_bid(listing_id, bidder).is_some() {
            warn!(listing = %listing_id, bidder = %bidder, "bid rejected: pending bid exists");
            return Err(BidError::DuplicatePendingBid {
                listing_id: listing_id.clone(),
                bidder: bidder.clone(),
            });
        }

        if !listing.accepts_amount(amount) {
            warn!(
                listing = %listing_id,
                amount = %amount,
                asking = %listing.asking_price,
                "bid rejected: invalid amount"
            );
            return Err(BidError::InvalidBidAmount {
                amount,
                asking_price: listing.asking_price,
            });
        }

        let bid = Bid::new(
            listing_id.clone(),
            bidder.clone(),
            bidder_name,
            amount,
            current_timestamp(),
        );
        info!(listing = %listing_id, bid = %bid.id, amount = %amount, "bid submitted");
        self.bids.insert(bid.clone());
        Ok(bid)
    }

    /// Accept a pending bid.
    ///
    /// Returns the accepted bid together with the purchase deadline the
    /// buyer is granted (5 days).
    pub fn accept_bid(&mut self, bid_id: &BidId) -> Result<BidAcceptance, BidError> {
        let mut bid = self.pending(bid_id)?;

        let now = current_timestamp();
        bid.status = BidStatus::Accepted;
        bid.resolved_at = Some(now);
        self.bids.update(bid.clone())?;

        info!(bid = %bid_id, listing = %bid.listing_id, "bid accepted");
        Ok(BidAcceptance {
            bid,
            purchase_deadline: now + PURCHASE_WINDOW_SECS,
        })
    }

    /// Decline a pending bid, optionally with a reason and a counter-offer.
    ///
    /// The counter-offer is advisory: it is surfaced to the buyer, who must
    /// submit a fresh bid to continue negotiating.
    pub fn decline_bid(
        &mut self,
        bid_id: &BidId,
        reason: Option<String>,
        counter_offer: Option<Money>,
    ) -> Result<Bid, BidError> {
        let mut bid = self.pending(bid_id)?;

        bid.status = BidStatus::Declined;
        bid.resolved_at = Some(current_timestamp());
        bid.decline_reason = reason;
        bid.counter_offer = counter_offer;
        self.bids.update(bid.clone())?;

        info!(
            bid = %bid_id,
            listing = %bid.listing_id,
            countered = bid.counter_offer.is_some(),
            "bid declined"
        );
        Ok(bid)
    }

    /// Whether the buyer has a pending bid on the listing.
    ///
    /// Derived from the bid store, never cached.
    pub fn has_pending_bid(&self, listing_id: &ListingId, bidder: &UserId) -> bool {
        self.bids.pending_bid(listing_id, bidder).is_some()
    }

    /// The listing's current bid for display: the most recent one, pending
    /// or resolved. Not an auction ranking.
    pub fn current_bid(&self, listing_id: &ListingId) -> Option<Bid> {
        self.bids.bids_for_listing(listing_id).into_iter().last()
    }

    fn pending(&self, bid_id: &BidId) -> Result<Bid, BidError> {
        let bid = self.bids.get(bid_id)?;
        if bid.status.is_terminal() {
            warn!(bid = %bid_id, status = bid.status.as_str(), "resolution rejected: bid not pending");
            return Err(BidError::InvalidBidState {
                bid_id: bid_id.clone(),
                status: bid.status,
            });
        }
        Ok(bid)
    }
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
