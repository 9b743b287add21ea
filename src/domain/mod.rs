//! Payment records, their lifecycle transitions and validation rules.

pub mod payment;
pub mod ports;
pub mod validation;
