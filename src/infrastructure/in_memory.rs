use crate::domain::payment::Payments;
use crate::domain::ports::PaymentStore;
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A volatile payment store.
///
/// Uses `Arc<RwLock<Payments>>` so clones share the same collection.
/// Ideal for testing or demos where persistence is not required.
#[derive(Default, Clone)]
pub struct InMemoryPaymentStore {
    payments: Arc<RwLock<Payments>>,
}

impl InMemoryPaymentStore {
    /// Creates a new, empty in-memory payment store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `payments`.
    pub fn with_payments(payments: Payments) -> Self {
        Self {
            payments: Arc::new(RwLock::new(payments)),
        }
    }
}

#[async_trait]
impl PaymentStore for InMemoryPaymentStore {
    async fn initialize(&self) -> Result<()> {
        Ok(())
    }

    async fn load_all(&self) -> Result<Payments> {
        let payments = self.payments.read().await;
        Ok(payments.clone())
    }

    async fn save_all(&self, payments: &Payments) -> Result<()> {
        let mut stored = self.payments.write().await;
        *stored = payments.clone();
        Ok(())
    }
}
