//! REST surface over [`crate::application::ledger::PaymentLedger`].

pub mod default_routers;
pub mod error_responses;
pub mod http_serve;
pub mod payments;
