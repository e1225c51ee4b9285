//! Checkout summary composition.

use crate::cart::SellerGroup;
use crate::checkout::{charge_breakdown, ChargeBreakdown, PaymentMethod};
use crate::error::CommerceError;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// The finalized, displayable order summary.
///
/// Purely a composition of the seller groups and the pricing policy; no I/O.
/// Identical inputs always produce an identical summary. Triggering the
/// actual payment is delegated to an external collaborator once
/// `checkout_enabled` is true.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutSummary {
    /// Seller groups the summary was built from.
    pub groups: Vec<SellerGroup>,
    /// Chosen payment method.
    pub method: PaymentMethod,
    /// Whether the buyer opted into the round-up donation.
    pub donation_opt_in: bool,
    /// The computed charges.
    pub breakdown: ChargeBreakdown,
    /// Whether the "pay" action may proceed.
    pub checkout_enabled: bool,
}

impl CheckoutSummary {
    /// Build a summary from seller groups and the chosen payment method.
    ///
    /// Fails with [`CommerceError::NothingSelected`] when zero items are
    /// selected across all groups: a $0.00 "chargeable" summary would be
    /// misleading, so the builder refuses to produce one. The UI should
    /// check [`CheckoutSummary::can_checkout`] before calling this.
    pub fn build(
        groups: Vec<SellerGroup>,
        method: PaymentMethod,
        donation_opt_in: bool,
    ) -> Result<CheckoutSummary, CommerceError> {
        let subtotal =
            Money::try_sum(groups.iter().map(|g| &g.subtotal)).ok_or(CommerceError::Overflow)?;

        if subtotal.is_zero() {
            return Err(CommerceError::NothingSelected);
        }

        let breakdown = charge_breakdown(subtotal, method, donation_opt_in);

        Ok(CheckoutSummary {
            groups,
            method,
            donation_opt_in,
            breakdown,
            checkout_enabled: Self::can_checkout(&breakdown),
        })
    }

    /// Whether a breakdown is chargeable: false iff the subtotal is zero.
    pub fn can_checkout(breakdown: &ChargeBreakdown) -> bool {
        !breakdown.subtotal.is_zero()
    }

    /// Display lines for the order summary panel, in render order.
    pub fn display_lines(&self) -> Vec<(&'static str, String)> {
        let b = &self.breakdown;
        let mut lines = vec![
            ("Subtotal", b.subtotal.display()),
            ("Estimated Tax", b.tax.display()),
            ("Transaction Fee (3%)", b.transaction_fee.display()),
        ];
        if b.discount.is_positive() {
            lines.push(("Online Payment Discount (2%)", format!("-{}", b.discount.display())));
        }
        if b.has_donation() {
            lines.push(("Round-Up Donation", b.donation.display()));
        }
        lines.push(("Total", b.total.display()));
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::{Cart, CartItem, ItemCondition, Seller};
    use crate::ids::SellerId;

    fn cart_with_two_sellers() -> Cart {
        let john = Seller::new(SellerId::new("sel-1"), "John Doe");
        let jane = Seller::new(SellerId::new("sel-2"), "Jane Smith");
        let mut cart = Cart::new();
        cart.add_item(CartItem::new(
            "Calculus Textbook",
            Money::from_cents(4500),
            john,
            ItemCondition::Good,
        ));
        cart.add_item(CartItem::new(
            "Desk Lamp",
            Money::from_cents(3000),
            jane,
            ItemCondition::LikeNew,
        ));
        cart
    }

    #[test]
    fn test_build_from_cart_groups() {
        let cart = cart_with_two_sellers();
        let summary =
            CheckoutSummary::build(cart.group_by_seller(), PaymentMethod::Stripe, false).unwrap();

        assert_eq!(summary.breakdown.subtotal.cents, 7500);
        assert_eq!(summary.breakdown.total.cents, 8044);
        assert!(summary.checkout_enabled);
    }

    #[test]
    fn test_build_rejects_empty_selection() {
        let mut cart = cart_with_two_sellers();
        for id in cart.items.iter().map(|i| i.id.clone()).collect::<Vec<_>>() {
            cart.toggle_item(&id);
        }

        let err =
            CheckoutSummary::build(cart.group_by_seller(), PaymentMethod::Stripe, false)
                .unwrap_err();
        assert!(matches!(err, CommerceError::NothingSelected));
    }

    #[test]
    fn test_build_rejects_empty_cart() {
        let err = CheckoutSummary::build(Vec::new(), PaymentMethod::Cash, true).unwrap_err();
        assert!(matches!(err, CommerceError::NothingSelected));
    }

    #[test]
    fn test_build_is_idempotent() {
        let groups = cart_with_two_sellers().group_by_seller();
        let a = CheckoutSummary::build(groups.clone(), PaymentMethod::Venmo, true).unwrap();
        let b = CheckoutSummary::build(groups, PaymentMethod::Venmo, true).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_display_lines_order_and_formatting() {
        let cart = cart_with_two_sellers();
        let summary =
            CheckoutSummary::build(cart.group_by_seller(), PaymentMethod::Stripe, true).unwrap();

        let lines = summary.display_lines();
        assert_eq!(lines[0], ("Subtotal", "$75.00".to_string()));
        assert_eq!(lines[1], ("Estimated Tax", "$4.69".to_string()));
        assert_eq!(lines[2], ("Transaction Fee (3%)", "$2.25".to_string()));
        assert_eq!(
            lines[3],
            ("Online Payment Discount (2%)", "-$1.50".to_string())
        );
        assert_eq!(lines[4], ("Round-Up Donation", "$0.56".to_string()));
        assert_eq!(lines.last().unwrap(), &("Total", "$81.00".to_string()));
    }

    #[test]
    fn test_cash_summary_has_no_discount_line() {
        let cart = cart_with_two_sellers();
        let summary =
            CheckoutSummary::build(cart.group_by_seller(), PaymentMethod::Cash, false).unwrap();

        let lines = summary.display_lines();
        assert!(lines
            .iter()
            .all(|(label, _)| !label.contains("Discount")));
        assert_eq!(lines.last().unwrap(), &("Total", "$81.94".to_string()));
    }
}
