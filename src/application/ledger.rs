use crate::domain::payment::{Amount, Operation, Payment, PaymentId, PaymentStatus, Payments};
use crate::domain::ports::PaymentStoreBox;
use crate::domain::validation::ValidationRule;
use crate::error::{PaymentError, Result};
use tracing::{debug, info};

/// The entry point for every payment lifecycle operation.
///
/// `PaymentLedger` owns the storage backend. Each operation loads the full
/// collection, applies one status-gated transition and writes the full
/// collection back. There is no isolation between concurrent operations:
/// the last write wins.
pub struct PaymentLedger {
    store: PaymentStoreBox,
}

impl PaymentLedger {
    /// Creates a new `PaymentLedger` over `store`.
    pub fn new(store: PaymentStoreBox) -> Self {
        Self { store }
    }

    /// Prepares the underlying store. Call once before serving requests.
    pub async fn initialize(&self) -> Result<()> {
        self.store.initialize().await
    }

    /// Returns every payment keyed by id.
    pub async fn list(&self) -> Result<Payments> {
        self.store.load_all().await
    }

    /// Creates a `REGISTERED` payment. Fails with `Conflict` if `id` is taken.
    pub async fn register(
        &self,
        id: &str,
        amount: Amount,
        payment_method: &str,
    ) -> Result<Payment> {
        let mut payments = self.store.load_all().await?;
        if payments.contains_key(id) {
            return Err(PaymentError::Conflict(id.to_string()));
        }

        let payment = Payment::new(amount, payment_method);
        payments.insert(id.to_string(), payment.clone());
        self.store.save_all(&payments).await?;

        info!(payment_id = id, %amount, payment_method, "payment registered");
        Ok(payment)
    }

    /// Overwrites amount and method of a `REGISTERED` payment.
    pub async fn update(
        &self,
        id: &str,
        amount: Amount,
        payment_method: &str,
    ) -> Result<Payment> {
        let mut payments = self.store.load_all().await?;
        let payment = lookup_mut(&mut payments, id)?;
        payment.update(amount, payment_method)?;
        let updated = payment.clone();
        self.store.save_all(&payments).await?;

        info!(payment_id = id, %amount, payment_method, "payment updated");
        Ok(updated)
    }

    /// Evaluates the rule for the payment's method and moves it to `PAID` or
    /// `FAILED`. A failed validation is a normal outcome, not an error.
    pub async fn pay(&self, id: &str) -> Result<PaymentStatus> {
        let mut payments = self.store.load_all().await?;

        let payment = payments
            .get(id)
            .ok_or_else(|| PaymentError::NotFound(id.to_string()))?;
        payment.require(Operation::Pay, PaymentStatus::Registered)?;

        // The payment being paid is part of the set the rule inspects.
        let rule = ValidationRule::for_method(&payment.payment_method);
        let valid = rule.validate(payment.amount, &payments);
        debug!(payment_id = id, ?rule, valid, "validation rule evaluated");

        let status = lookup_mut(&mut payments, id)?.settle(valid)?;
        self.store.save_all(&payments).await?;

        info!(payment_id = id, %status, "payment settled");
        Ok(status)
    }

    /// Returns a `FAILED` payment to `REGISTERED`.
    pub async fn revert(&self, id: &str) -> Result<PaymentStatus> {
        let mut payments = self.store.load_all().await?;
        let payment = lookup_mut(&mut payments, id)?;
        payment.revert()?;
        let status = payment.status;
        self.store.save_all(&payments).await?;

        info!(payment_id = id, "payment reverted");
        Ok(status)
    }
}

fn lookup_mut<'a>(payments: &'a mut Payments, id: &str) -> Result<&'a mut Payment> {
    payments
        .get_mut(id)
        .ok_or_else(|| PaymentError::NotFound(PaymentId::from(id)))
}
