//! Bid model.

use mart_commerce::ids::{BidId, ListingId, UserId};
use mart_commerce::money::Money;
use serde::{Deserialize, Serialize};

/// Lifecycle of a bid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BidStatus {
    /// Awaiting the seller's decision.
    #[default]
    Pending,
    /// Seller accepted; the buyer has a window to complete the purchase.
    Accepted,
    /// Seller declined, possibly with a counter-offer.
    Declined,
}

impl BidStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BidStatus::Pending => "pending",
            BidStatus::Accepted => "accepted",
            BidStatus::Declined => "declined",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            BidStatus::Pending => "Pending",
            BidStatus::Accepted => "Accepted",
            BidStatus::Declined => "Declined",
        }
    }

    /// Accepted and Declined are terminal; no transitions out.
    pub fn is_terminal(&self) -> bool {
        matches!(self, BidStatus::Accepted | BidStatus::Declined)
    }
}

/// A buyer's offer on a listing.
///
/// Bids are append-only history: they are never deleted, only transitioned
/// out of Pending by the listing's seller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bid {
    /// Unique bid identifier.
    pub id: BidId,
    /// The listing this bid is on.
    pub listing_id: ListingId,
    /// The buyer.
    pub bidder: UserId,
    /// Buyer display name (denormalized for the inbox).
    pub bidder_name: String,
    /// Offered amount; always below the asking price.
    pub amount: Money,
    /// Unix timestamp of submission.
    pub created_at: i64,
    /// Current status.
    pub status: BidStatus,
    /// Seller's reason when declining.
    pub decline_reason: Option<String>,
    /// Seller's advisory counter-offer when declining. Never creates a new
    /// bid by itself; the buyer must submit again to continue negotiating.
    pub counter_offer: Option<Money>,
    /// Unix timestamp of acceptance/decline.
    pub resolved_at: Option<i64>,
}

impl Bid {
    /// Create a new pending bid.
    pub fn new(
        listing_id: ListingId,
        bidder: UserId,
        bidder_name: impl Into<String>,
        amount: Money,
        created_at: i64,
    ) -> Self {
        Self {
            id: BidId::generate(),
            listing_id,
            bidder,
            bidder_name: bidder_name.into(),
            amount,
            created_at,
            status: BidStatus::Pending,
            decline_reason: None,
            counter_offer: None,
            resolved_at: None,
        }
    }

    /// Whether this bid is still awaiting the seller.
    pub fn is_pending(&self) -> bool {
        self.status == BidStatus::Pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_bid_is_pending() {
        let bid = Bid::new(
            ListingId::new("lst-1"),
            UserId::new("usr-1"),
            "Jane Smith",
            Money::from_cents(4000),
            1_700_000_000,
        );
        assert!(bid.is_pending());
        assert!(bid.counter_offer.is_none());
        assert!(bid.resolved_at.is_none());
    }

    #[test]
    fn test_terminal_states() {
        assert!(!BidStatus::Pending.is_terminal());
        assert!(BidStatus::Accepted.is_terminal());
        assert!(BidStatus::Declined.is_terminal());
    }

    #[test]
    fn test_status_strings() {
        assert_eq!(BidStatus::Pending.as_str(), "pending");
        assert_eq!(BidStatus::Declined.display_name(), "Declined");
    }
}
