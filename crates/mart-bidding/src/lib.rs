//! Bid and counter-offer negotiation engine for UniMart listings.
//!
//! A buyer offers less than the asking price on a listing that allows
//! bidding; the seller accepts or declines, optionally countering. This
//! crate owns the state machine and its invariants:
//!
//! - at most one Pending bid per (listing, bidder) at any time
//! - bids are below the asking price and strictly positive
//! - Accepted and Declined are terminal; resolved bids never transition again
//! - rejected operations leave repository state untouched
//!
//! Storage sits behind [`repository::ListingRepository`] and
//! [`repository::BidRepository`] seams; the in-memory implementations back
//! the single-session client and the tests. Everything is synchronous: the
//! engine runs on one logical thread, driven by UI events.

pub mod bid;
pub mod error;
pub mod gateway;
pub mod listing;
pub mod negotiation;
pub mod repository;

pub use error::BidError;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::bid::{Bid, BidStatus};
    pub use crate::error::BidError;
    pub use crate::gateway::{BidInboxEntry, ListingBidView, ListingBiddingGateway};
    pub use crate::listing::Listing;
    pub use crate::negotiation::{BidAcceptance, BidNegotiation, PURCHASE_WINDOW_SECS};
    pub use crate::repository::{
        BidRepository, InMemoryBidRepository, InMemoryListingRepository, ListingRepository,
    };
}
