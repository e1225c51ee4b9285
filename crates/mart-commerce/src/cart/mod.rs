//! Shopping cart module.
//!
//! Contains types for cart line items, selection toggles, and the
//! per-seller grouping the cart page renders.

mod group;
mod item;

pub use group::{Cart, SellerGroup};
pub use item::{CartItem, ItemCondition, Seller};
