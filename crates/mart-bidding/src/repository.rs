//! Repository seams for listings and bids.
//!
//! The negotiation engine depends only on these traits; the in-memory
//! implementations back the single-session client and the tests, and a
//! networked implementation can slot in behind the same interface. Calls
//! are synchronous because the engine runs on one logical thread.

use crate::bid::Bid;
use crate::error::BidError;
use crate::listing::Listing;
use mart_commerce::ids::{BidId, ListingId, UserId};
use std::collections::HashMap;

/// Read access to listings.
pub trait ListingRepository {
    /// Fetch a listing by ID.
    fn listing(&self, id: &ListingId) -> Result<Listing, BidError>;
}

/// Append-only storage for bids.
pub trait BidRepository {
    /// Store a new bid.
    fn insert(&mut self, bid: Bid);

    /// Fetch a bid by ID.
    fn get(&self, id: &BidId) -> Result<Bid, BidError>;

    /// Replace a stored bid (status transition).
    fn update(&mut self, bid: Bid) -> Result<(), BidError>;

    /// All bids on a listing, in submission order.
    fn bids_for_listing(&self, listing_id: &ListingId) -> Vec<Bid>;

    /// The buyer's pending bid on a listing, if any.
    fn pending_bid(&self, listing_id: &ListingId, bidder: &UserId) -> Option<Bid>;

    /// All bids across listings, in submission order.
    fn all_bids(&self) -> Vec<Bid>;
}

/// In-memory listing store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryListingRepository {
    listings: HashMap<ListingId, Listing>,
}

impl InMemoryListingRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a listing.
    pub fn put(&mut self, listing: Listing) {
        self.listings.insert(listing.id.clone(), listing);
    }
}

impl ListingRepository for InMemoryListingRepository {
    fn listing(&self, id: &ListingId) -> Result<Listing, BidError> {
        self.listings
            .get(id)
            .cloned()
            .ok_or_else(|| BidError::ListingNotFound(id.clone()))
    }
}

/// In-memory bid store, insertion-ordered.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBidRepository {
    bids: Vec<Bid>,
}

impl InMemoryBidRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored bids.
    pub fn len(&self) -> usize {
        self.bids.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.bids.is_empty()
    }
}

impl BidRepository for InMemoryBidRepository {
    fn insert(&mut self, bid: Bid) {
        self.bids.push(bid);
    }

    fn get(&self, id: &BidId) -> Result<Bid, BidError> {
        self.bids
            .iter()
            .find(|b| &b.id == id)
            .cloned()
            .ok_or_else(|| BidError::BidNotFound(id.clone()))
    }

    fn update(&mut self, bid: Bid) -> Result<(), BidError> {
        match self.bids.iter_mut().find(|b| b.id == bid.id) {
            Some(stored) => {
                *stored = bid;
                Ok(())
            }
            None => Err(BidError::BidNotFound(bid.id)),
        }
    }

    fn bids_for_listing(&self, listing_id: &ListingId) -> Vec<Bid> {
        self.bids
            .iter()
            .filter(|b| &b.listing_id == listing_id)
            .cloned()
            .collect()
    }

    fn pending_bid(&self, listing_id: &ListingId, bidder: &UserId) -> Option<Bid> {
        self.bids
            .iter()
            .find(|b| b.is_pending() && &b.listing_id == listing_id && &b.bidder == bidder)
            .cloned()
    }

    fn all_bids(&self) -> Vec<Bid> {
        self.bids.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mart_commerce::money::Money;

    fn bid(listing: &str, bidder: &str) -> Bid {
        Bid::new(
            ListingId::new(listing),
            UserId::new(bidder),
            "Test Buyer",
            Money::from_cents(1000),
            1_700_000_000,
        )
    }

    #[test]
    fn test_listing_repo_miss() {
        let repo = InMemoryListingRepository::new();
        assert!(matches!(
            repo.listing(&ListingId::new("missing")),
            Err(BidError::ListingNotFound(_))
        ));
    }

    #[test]
    fn test_bid_repo_insert_and_query() {
        let mut repo = InMemoryBidRepository::new();
        let b1 = bid("lst-1", "usr-1");
        let b2 = bid("lst-1", "usr-2");
        let b3 = bid("lst-2", "usr-1");
        repo.insert(b1.clone());
        repo.insert(b2);
        repo.insert(b3);

        assert_eq!(repo.len(), 3);
        assert_eq!(repo.bids_for_listing(&ListingId::new("lst-1")).len(), 2);
        assert_eq!(
            repo.pending_bid(&ListingId::new("lst-1"), &UserId::new("usr-1"))
                .map(|b| b.id),
            Some(b1.id)
        );
    }

    #[test]
    fn test_bid_repo_update_missing() {
        let mut repo = InMemoryBidRepository::new();
        let err = repo.update(bid("lst-1", "usr-1")).unwrap_err();
        assert!(matches!(err, BidError::BidNotFound(_)));
    }
}
