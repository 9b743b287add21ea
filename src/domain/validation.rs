//! Per-method validation rules applied when a payment is paid.
//!
//! A rule is resolved from the payment method label and evaluated against the
//! payment amount and the full set of stored payments. Resolution never fails:
//! labels without a dedicated rule resolve to [`ValidationRule::RejectAll`].

use super::payment::{Amount, PaymentStatus, Payments};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Labels accepted for credit card payments.
pub const CREDIT_CARD_LABELS: [&str; 2] = ["Credit Card", "Tarjeta de Crédito"];
/// Label for PayPal wallet payments.
pub const PAYPAL_LABEL: &str = "PayPal";

/// Credit card payments must stay strictly below this amount.
pub const CREDIT_CARD_LIMIT: Decimal = dec!(10000);
/// Wallet payments must stay strictly below this amount.
pub const WALLET_LIMIT: Decimal = dec!(5000);
/// Maximum number of `REGISTERED` credit card payments, counting the one being paid.
pub const MAX_REGISTERED_CREDIT_CARD: usize = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationRule {
    CreditCard,
    ThirdPartyWallet,
    RejectAll,
}

impl ValidationRule {
    pub fn for_method(payment_method: &str) -> Self {
        if is_credit_card(payment_method) {
            ValidationRule::CreditCard
        } else if payment_method == PAYPAL_LABEL {
            ValidationRule::ThirdPartyWallet
        } else {
            ValidationRule::RejectAll
        }
    }

    /// Returns `true` when a payment of `amount` may be marked paid given the
    /// current state of `payments`.
    pub fn validate(&self, amount: Amount, payments: &Payments) -> bool {
        match self {
            ValidationRule::CreditCard => {
                amount.value() < CREDIT_CARD_LIMIT
                    && registered_credit_cards(payments) <= MAX_REGISTERED_CREDIT_CARD
            }
            ValidationRule::ThirdPartyWallet => amount.value() < WALLET_LIMIT,
            ValidationRule::RejectAll => false,
        }
    }
}

fn is_credit_card(payment_method: &str) -> bool {
    CREDIT_CARD_LABELS.contains(&payment_method)
}

fn registered_credit_cards(payments: &Payments) -> usize {
    payments
        .values()
        .filter(|p| is_credit_card(&p.payment_method) && p.status == PaymentStatus::Registered)
        .count()
}
