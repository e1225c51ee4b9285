//! Cart line item types.

use crate::ids::{CartItemId, SellerId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Condition of a second-hand listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemCondition {
    /// Never used.
    New,
    /// Used once or twice, no visible wear.
    LikeNew,
    /// Light wear.
    Good,
    /// Noticeable wear, fully functional.
    Fair,
    /// Heavy wear.
    Poor,
}

impl ItemCondition {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemCondition::New => "new",
            ItemCondition::LikeNew => "like_new",
            ItemCondition::Good => "good",
            ItemCondition::Fair => "fair",
            ItemCondition::Poor => "poor",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ItemCondition::New => "New",
            ItemCondition::LikeNew => "Like New",
            ItemCondition::Good => "Good",
            ItemCondition::Fair => "Fair",
            ItemCondition::Poor => "Poor",
        }
    }

    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "new" => Some(ItemCondition::New),
            "like_new" => Some(ItemCondition::LikeNew),
            "good" => Some(ItemCondition::Good),
            "fair" => Some(ItemCondition::Fair),
            "poor" => Some(ItemCondition::Poor),
            _ => None,
        }
    }
}

/// The seller a cart item belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Seller {
    /// Seller identifier.
    pub id: SellerId,
    /// Display name shown on the group header.
    pub display_name: String,
}

impl Seller {
    /// Create a new seller reference.
    pub fn new(id: SellerId, display_name: impl Into<String>) -> Self {
        Self {
            id,
            display_name: display_name.into(),
        }
    }
}

/// A line item in the cart.
///
/// Only items with `selected == true` contribute to any subtotal; unselected
/// items still render in their seller group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    /// Unique line item identifier.
    pub id: CartItemId,
    /// Listing title (denormalized for display).
    pub title: String,
    /// Unit price.
    pub unit_price: Money,
    /// Seller of the listing.
    pub seller: Seller,
    /// Listing condition.
    pub condition: ItemCondition,
    /// Whether the item is checked for checkout.
    pub selected: bool,
}

impl CartItem {
    /// Create a new line item, selected by default.
    pub fn new(
        title: impl Into<String>,
        unit_price: Money,
        seller: Seller,
        condition: ItemCondition,
    ) -> Self {
        Self {
            id: CartItemId::generate(),
            title: title.into(),
            unit_price,
            seller,
            condition,
            selected: true,
        }
    }

    /// The amount this item contributes to subtotals.
    pub fn subtotal_contribution(&self) -> Money {
        if self.selected {
            self.unit_price
        } else {
            Money::zero()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seller() -> Seller {
        Seller::new(SellerId::new("sel-1"), "Jane Smith")
    }

    #[test]
    fn test_new_item_is_selected() {
        let item = CartItem::new(
            "Textbook for CS2800",
            Money::from_cents(4500),
            seller(),
            ItemCondition::LikeNew,
        );
        assert!(item.selected);
        assert_eq!(item.subtotal_contribution().cents, 4500);
    }

    #[test]
    fn test_unselected_item_contributes_zero() {
        let mut item = CartItem::new(
            "Desk Lamp",
            Money::from_cents(1200),
            seller(),
            ItemCondition::Good,
        );
        item.selected = false;
        assert!(item.subtotal_contribution().is_zero());
    }

    #[test]
    fn test_condition_round_trip() {
        assert_eq!(ItemCondition::from_str("like_new"), Some(ItemCondition::LikeNew));
        assert_eq!(ItemCondition::LikeNew.display_name(), "Like New");
        assert_eq!(ItemCondition::from_str("mint"), None);
    }
}
