//! Payment method types.

use serde::{Deserialize, Serialize};

/// How the buyer pays.
///
/// Cash is the one method that does not receive the online-payment discount;
/// aside from that (and the button label) the method never affects price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PaymentMethod {
    /// Card payment through Stripe.
    #[default]
    Stripe,
    /// Venmo transfer.
    Venmo,
    /// Apple Pay.
    ApplePay,
    /// Cash on meetup.
    Cash,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Stripe => "stripe",
            PaymentMethod::Venmo => "venmo",
            PaymentMethod::ApplePay => "apple",
            PaymentMethod::Cash => "cash",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentMethod::Stripe => "Stripe",
            PaymentMethod::Venmo => "Venmo",
            PaymentMethod::ApplePay => "Apple Pay",
            PaymentMethod::Cash => "Cash",
        }
    }

    /// Label for the checkout button.
    pub fn pay_label(&self) -> &'static str {
        match self {
            PaymentMethod::Stripe => "Pay with Stripe",
            PaymentMethod::Venmo => "Pay with Venmo",
            PaymentMethod::ApplePay => "Pay with Apple Pay",
            PaymentMethod::Cash => "Pay with Cash",
        }
    }

    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "stripe" => Some(PaymentMethod::Stripe),
            "venmo" => Some(PaymentMethod::Venmo),
            "apple" => Some(PaymentMethod::ApplePay),
            "cash" => Some(PaymentMethod::Cash),
            _ => None,
        }
    }

    /// Whether this method earns the 2% online-payment discount.
    pub fn qualifies_for_online_discount(&self) -> bool {
        !matches!(self, PaymentMethod::Cash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_cash_skips_discount() {
        assert!(PaymentMethod::Stripe.qualifies_for_online_discount());
        assert!(PaymentMethod::Venmo.qualifies_for_online_discount());
        assert!(PaymentMethod::ApplePay.qualifies_for_online_discount());
        assert!(!PaymentMethod::Cash.qualifies_for_online_discount());
    }

    #[test]
    fn test_from_str_round_trip() {
        for m in [
            PaymentMethod::Stripe,
            PaymentMethod::Venmo,
            PaymentMethod::ApplePay,
            PaymentMethod::Cash,
        ] {
            assert_eq!(PaymentMethod::from_str(m.as_str()), Some(m));
        }
        assert_eq!(PaymentMethod::from_str("paypal"), None);
    }

    #[test]
    fn test_pay_label() {
        assert_eq!(PaymentMethod::ApplePay.pay_label(), "Pay with Apple Pay");
    }
}
