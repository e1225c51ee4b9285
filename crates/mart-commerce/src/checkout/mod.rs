//! Checkout module.
//!
//! Contains the payment method enum, the pricing policy (tax, transaction
//! fee, online-payment discount, round-up donation), and the checkout
//! summary that gates the "pay" action.

mod payment;
mod pricing;
mod summary;

pub use payment::PaymentMethod;
pub use pricing::{
    charge_breakdown, discount, donation, tax, transaction_fee, ChargeBreakdown,
    ONLINE_DISCOUNT_BPS, TAX_RATE_BPS, TRANSACTION_FEE_BPS,
};
pub use summary::CheckoutSummary;
