use super::payment::Payments;
use crate::error::Result;
use async_trait::async_trait;

/// Full-read / full-write persistence of the payment collection.
///
/// There are no partial updates: every operation loads the whole collection,
/// mutates one record and writes the whole collection back.
#[async_trait]
pub trait PaymentStore: Send + Sync {
    /// Prepares the backing storage so that `load_all` succeeds on first use.
    async fn initialize(&self) -> Result<()>;
    async fn load_all(&self) -> Result<Payments>;
    async fn save_all(&self, payments: &Payments) -> Result<()>;
}

pub type PaymentStoreBox = Box<dyn PaymentStore>;
