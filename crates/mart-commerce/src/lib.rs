//! Cart grouping, pricing policy, and checkout summary for UniMart.
//!
//! This crate is the pricing half of the marketplace core:
//!
//! - **Money**: cents-based USD amounts with round-half-up semantics
//! - **Cart**: line items grouped by seller, selection toggles
//! - **Checkout**: tax/fee/discount/round-up-donation policy and the
//!   final charge breakdown that gates the "pay" action
//!
//! Everything here is a pure, synchronous function over in-memory state.
//! The surrounding application owns the only mutable store and re-invokes
//! these functions on every change rather than patching derived fields.
//!
//! # Example
//!
//! ```rust,ignore
//! use mart_commerce::prelude::*;
//!
//! let mut cart = Cart::new();
//! cart.add_item(CartItem::new(
//!     "Textbook for CS2800",
//!     Money::from_cents(7500),
//!     Seller::new(SellerId::new("sel-1"), "Jane Smith"),
//!     ItemCondition::LikeNew,
//! ));
//!
//! let summary = CheckoutSummary::build(
//!     cart.group_by_seller(),
//!     PaymentMethod::Stripe,
//!     false,
//! )?;
//! println!("Total: {}", summary.breakdown.total);
//! ```

pub mod cart;
pub mod checkout;
pub mod error;
pub mod ids;
pub mod money;

pub use error::CommerceError;
pub use ids::*;
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::Money;

    // Cart
    pub use crate::cart::{Cart, CartItem, ItemCondition, Seller, SellerGroup};

    // Checkout
    pub use crate::checkout::{
        charge_breakdown, ChargeBreakdown, CheckoutSummary, PaymentMethod,
    };
}
