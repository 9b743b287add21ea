//! Application layer orchestrating payment lifecycle operations.
//!
//! [`ledger::PaymentLedger`] loads the payment collection from a store,
//! applies one domain transition and persists the result.

pub mod ledger;
