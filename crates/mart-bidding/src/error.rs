//! Bidding error types.

use crate::bid::BidStatus;
use mart_commerce::ids::{BidId, ListingId, UserId};
use mart_commerce::money::Money;
use thiserror::Error;

/// Errors that can occur in bid negotiation.
///
/// All of these are local, synchronous validation failures surfaced to the
/// caller; none are retried and none leave partial state behind.
#[derive(Error, Debug)]
pub enum BidError {
    /// Listing not found.
    #[error("Listing not found: {0}")]
    ListingNotFound(ListingId),

    /// Bid not found.
    #[error("Bid not found: {0}")]
    BidNotFound(BidId),

    /// The listing does not accept offers.
    #[error("Listing {0} does not allow bidding")]
    BiddingNotAllowed(ListingId),

    /// Bid amount must be positive and below the asking price.
    #[error("Bid amount {amount} must be greater than $0.00 and less than the asking price {asking_price}")]
    InvalidBidAmount {
        amount: Money,
        asking_price: Money,
    },

    /// A second concurrent bid from the same buyer on the same listing.
    #[error("Buyer {bidder} already has a pending bid on listing {listing_id}")]
    DuplicatePendingBid {
        listing_id: ListingId,
        bidder: UserId,
    },

    /// Accept/decline attempted on a bid that is no longer pending.
    #[error("Bid {bid_id} is {status} and can no longer be resolved", status = .status.as_str())]
    InvalidBidState { bid_id: BidId, status: BidStatus },
}
