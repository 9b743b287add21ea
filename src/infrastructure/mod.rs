//! Storage backends implementing [`crate::domain::ports::PaymentStore`].

pub mod in_memory;
pub mod json_file;
#[cfg(feature = "storage-rocksdb")]
pub mod rocksdb;
