//! Pricing policy: tax, transaction fee, payment discount, round-up donation.
//!
//! Pure functions over the selected-items subtotal. The operation order is
//! part of the advertised policy and must not be rearranged: tax and fee are
//! computed on the raw subtotal, the discount comes off after the fee is
//! added (net 1% fee online, 3% cash), and the donation rounds the
//! already-fee-adjusted total up to the next whole dollar.

use crate::checkout::PaymentMethod;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Estimated tax rate: 6.25%.
pub const TAX_RATE_BPS: i64 = 625;

/// Platform transaction fee: 3% on every order.
pub const TRANSACTION_FEE_BPS: i64 = 300;

/// Online-payment discount: 2% for every method except cash.
pub const ONLINE_DISCOUNT_BPS: i64 = 200;

/// Estimated tax on a subtotal.
pub fn tax(subtotal: Money) -> Money {
    subtotal.rate_bps(TAX_RATE_BPS)
}

/// Platform fee on a subtotal, charged regardless of payment method.
pub fn transaction_fee(subtotal: Money) -> Money {
    subtotal.rate_bps(TRANSACTION_FEE_BPS)
}

/// Online-payment discount; zero for cash.
pub fn discount(subtotal: Money, method: PaymentMethod) -> Money {
    if method.qualifies_for_online_discount() {
        subtotal.rate_bps(ONLINE_DISCOUNT_BPS)
    } else {
        Money::zero()
    }
}

/// Round-up donation on the post-fee, post-discount total.
///
/// Integer cents only; never negative, zero when the running total already
/// lands on a whole dollar or the buyer did not opt in.
pub fn donation(
    subtotal: Money,
    tax: Money,
    transaction_fee: Money,
    discount: Money,
    opted_in: bool,
) -> Money {
    if !opted_in {
        return Money::zero();
    }
    let running_total = subtotal + tax + transaction_fee - discount;
    running_total.roundup_to_dollar_gap()
}

/// A finalized breakdown of checkout charges.
///
/// Immutable once computed; recomputation produces a new value that
/// supersedes (never mutates) the old one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargeBreakdown {
    /// Sum of selected items' unit prices.
    pub subtotal: Money,
    /// Estimated tax on the subtotal.
    pub tax: Money,
    /// Platform transaction fee.
    pub transaction_fee: Money,
    /// Online-payment discount (zero for cash).
    pub discount: Money,
    /// Round-up donation (zero unless opted in).
    pub donation: Money,
    /// `subtotal + tax + transaction_fee - discount + donation`.
    pub total: Money,
}

/// Compute the full charge breakdown for a subtotal.
///
/// A zero subtotal yields an all-zero breakdown; the checkout gate lives in
/// [`crate::checkout::CheckoutSummary`], not here.
pub fn charge_breakdown(
    subtotal: Money,
    method: PaymentMethod,
    donation_opt_in: bool,
) -> ChargeBreakdown {
    let tax = tax(subtotal);
    let transaction_fee = transaction_fee(subtotal);
    let discount = discount(subtotal, method);
    let donation = donation(subtotal, tax, transaction_fee, discount, donation_opt_in);
    let total = subtotal + tax + transaction_fee - discount + donation;

    ChargeBreakdown {
        subtotal,
        tax,
        transaction_fee,
        discount,
        donation,
        total,
    }
}

impl ChargeBreakdown {
    /// Whether any donation is being collected.
    pub fn has_donation(&self) -> bool {
        self.donation.is_positive()
    }

    /// Net fee after the discount (1% online, 3% cash for the current rates).
    pub fn net_fee(&self) -> Money {
        self.transaction_fee - self.discount
    }
}
