use crate::domain::payment::{Operation, PaymentId, PaymentStatus};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PaymentError {
    #[error("Payment {0} not found")]
    NotFound(PaymentId),
    #[error("Payment ID {0} already exists")]
    Conflict(PaymentId),
    #[error("Cannot {operation} payment in status {status}")]
    InvalidTransition {
        operation: Operation,
        status: PaymentStatus,
    },
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
    #[cfg(feature = "storage-rocksdb")]
    #[error("Storage error: {0}")]
    StorageError(#[from] rocksdb::Error),
}

pub type Result<T> = std::result::Result<T, PaymentError>;
