//! Cart container and per-seller grouping.

use crate::cart::{CartItem, Seller};
use crate::ids::{CartItemId, SellerId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// The shopping cart: an ordered list of line items.
///
/// The cart is the only mutable store for line items; every derived value
/// (groups, subtotals) is recomputed from it on demand.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    /// Items in the cart, in insertion order.
    pub items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Add an item to the cart.
    pub fn add_item(&mut self, item: CartItem) -> CartItemId {
        let id = item.id.clone();
        self.items.push(item);
        id
    }

    /// Remove an item from the cart. Returns whether an item was removed.
    pub fn remove_item(&mut self, item_id: &CartItemId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| &i.id != item_id);
        self.items.len() < len_before
    }

    /// Flip the selection state of a single item.
    ///
    /// Returns the new selection state, or None if the item is not in the cart.
    pub fn toggle_item(&mut self, item_id: &CartItemId) -> Option<bool> {
        let item = self.items.iter_mut().find(|i| &i.id == item_id)?;
        item.selected = !item.selected;
        Some(item.selected)
    }

    /// Set the selection state of every item belonging to a seller.
    ///
    /// The whole group flips in one pass; a partially-toggled seller group is
    /// never observable. Unknown sellers are a no-op.
    pub fn toggle_seller(&mut self, seller_id: &SellerId, checked: bool) {
        for item in self.items.iter_mut().filter(|i| &i.seller.id == seller_id) {
            item.selected = checked;
        }
    }

    /// Whether every item of a seller is currently selected.
    pub fn is_seller_fully_selected(&self, seller_id: &SellerId) -> bool {
        self.items
            .iter()
            .filter(|i| &i.seller.id == seller_id)
            .all(|i| i.selected)
    }

    /// Get an item by ID.
    pub fn item(&self, item_id: &CartItemId) -> Option<&CartItem> {
        self.items.iter().find(|i| &i.id == item_id)
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items, selected or not.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Clear all items (removal on successful checkout).
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Subtotal over selected items only.
    pub fn selected_subtotal(&self) -> Money {
        self.items.iter().map(|i| i.subtotal_contribution()).sum()
    }

    /// Group items by seller, preserving seller-first-seen order.
    ///
    /// Every item appears in its seller's group; only selected items count
    /// toward the group subtotal. An empty cart yields an empty list.
    pub fn group_by_seller(&self) -> Vec<SellerGroup> {
        let mut groups: Vec<SellerGroup> = Vec::new();
        for item in &self.items {
            match groups.iter_mut().find(|g| g.seller.id == item.seller.id) {
                Some(group) => group.items.push(item.clone()),
                None => groups.push(SellerGroup {
                    seller: item.seller.clone(),
                    items: vec![item.clone()],
                    subtotal: Money::zero(),
                }),
            }
        }
        for group in &mut groups {
            group.subtotal = group
                .items
                .iter()
                .map(|i| i.subtotal_contribution())
                .sum();
        }
        groups
    }
}

/// A derived snapshot of one seller's items in the cart.
///
/// Recomputed on every cart mutation, never stored independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SellerGroup {
    /// The seller.
    pub seller: Seller,
    /// All of the seller's items in the cart (selected or not).
    pub items: Vec<CartItem>,
    /// Subtotal over the selected items in this group.
    pub subtotal: Money,
}

impl SellerGroup {
    /// Number of selected items in the group.
    pub fn selected_count(&self) -> usize {
        self.items.iter().filter(|i| i.selected).count()
    }
}
