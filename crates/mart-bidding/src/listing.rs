//! Listing model, as seen by the bidding engine.

use mart_commerce::ids::{ListingId, SellerId};
use mart_commerce::money::Money;
use serde::{Deserialize, Serialize};

/// A marketplace listing that may accept offers.
///
/// Bid history lives behind [`crate::repository::BidRepository`], not on the
/// listing itself; this struct carries only what the negotiation rules read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    /// Unique listing identifier.
    pub id: ListingId,
    /// Listing title (denormalized for the bid inbox).
    pub title: String,
    /// The seller.
    pub seller: SellerId,
    /// Posted asking price; every bid must come in under it.
    pub asking_price: Money,
    /// Whether the seller opted into offers.
    pub allows_bidding: bool,
}

impl Listing {
    /// Create a new listing.
    pub fn new(
        id: ListingId,
        title: impl Into<String>,
        seller: SellerId,
        asking_price: Money,
        allows_bidding: bool,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            seller,
            asking_price,
            allows_bidding,
        }
    }

    /// Whether an offered amount is acceptable for this listing.
    ///
    /// Amounts must be strictly positive and strictly below the asking
    /// price; matching the asking price is a purchase, not a bid.
    pub fn accepts_amount(&self, amount: Money) -> bool {
        amount.is_positive() && amount < self.asking_price
    }
}
