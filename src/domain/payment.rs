use crate::error::{PaymentError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// Externally supplied payment identifier.
pub type PaymentId = String;

/// The full keyed collection of payments, as read from and written to a store.
pub type Payments = BTreeMap<PaymentId, Payment>;

/// A non-negative monetary amount.
///
/// Wraps `rust_decimal::Decimal` so that a negative value can never reach a
/// stored record. Serialized as a plain JSON number.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Amount(Decimal);

impl Amount {
    pub fn new(value: Decimal) -> Result<Self> {
        if value >= Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(PaymentError::ValidationError(
                "Amount must not be negative".to_string(),
            ))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = PaymentError;

    fn try_from(value: Decimal) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        rust_decimal::serde::float::serialize(&self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = rust_decimal::serde::float::deserialize(deserializer)?;
        Amount::new(value).map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Registered,
    Paid,
    Failed,
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PaymentStatus::Registered => "REGISTERED",
            PaymentStatus::Paid => "PAID",
            PaymentStatus::Failed => "FAILED",
        };
        f.write_str(label)
    }
}

/// Status-gated operations, named in transition errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Update,
    Pay,
    Revert,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Operation::Update => "update",
            Operation::Pay => "pay",
            Operation::Revert => "revert",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub amount: Amount,
    pub payment_method: String,
    pub status: PaymentStatus,
}

impl Payment {
    /// Creates a payment in the `REGISTERED` state.
    pub fn new(amount: Amount, payment_method: impl Into<String>) -> Self {
        Self {
            amount,
            payment_method: payment_method.into(),
            status: PaymentStatus::Registered,
        }
    }

    /// Fails with `InvalidTransition` unless the payment is in `expected` state.
    pub fn require(&self, operation: Operation, expected: PaymentStatus) -> Result<()> {
        if self.status == expected {
            Ok(())
        } else {
            Err(PaymentError::InvalidTransition {
                operation,
                status: self.status,
            })
        }
    }

    /// Overwrites amount and method. Only legal while `REGISTERED`.
    pub fn update(&mut self, amount: Amount, payment_method: impl Into<String>) -> Result<()> {
        self.require(Operation::Update, PaymentStatus::Registered)?;
        self.amount = amount;
        self.payment_method = payment_method.into();
        Ok(())
    }

    /// Moves a `REGISTERED` payment to `PAID` or `FAILED` depending on the
    /// outcome of its validation rule.
    pub fn settle(&mut self, valid: bool) -> Result<PaymentStatus> {
        self.require(Operation::Pay, PaymentStatus::Registered)?;
        self.status = if valid {
            PaymentStatus::Paid
        } else {
            PaymentStatus::Failed
        };
        Ok(self.status)
    }

    /// Returns a `FAILED` payment to `REGISTERED`.
    pub fn revert(&mut self) -> Result<()> {
        self.require(Operation::Revert, PaymentStatus::Failed)?;
        self.status = PaymentStatus::Registered;
        Ok(())
    }
}
