use crate::domain::payment::{Payment, Payments};
use crate::domain::ports::PaymentStore;
use crate::error::{PaymentError, Result};
use async_trait::async_trait;
use rocksdb::{ColumnFamily, ColumnFamilyDescriptor, DB, IteratorMode, Options, WriteBatch};
use std::path::Path;
use std::sync::Arc;

/// Column Family holding one entry per payment, keyed by payment id.
pub const CF_PAYMENTS: &str = "payments";

/// A persistent store implementation using RocksDB.
///
/// Each payment is a separate key in the `payments` Column Family, but the
/// store still honours full-collection semantics: `save_all` rewrites the
/// collection in one atomic `WriteBatch`, removing ids that are no longer
/// present.
///
/// This struct is thread-safe (`Clone` shares the underlying `Arc<DB>`).
#[derive(Clone)]
pub struct RocksDBStore {
    db: Arc<DB>,
}

impl RocksDBStore {
    /// Opens or creates a RocksDB instance at the specified path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);

        let cf_payments = ColumnFamilyDescriptor::new(CF_PAYMENTS, Options::default());
        let db = DB::open_cf_descriptors(&opts, path, vec![cf_payments])?;

        Ok(Self { db: Arc::new(db) })
    }

    fn payments_cf(&self) -> Result<&ColumnFamily> {
        self.db.cf_handle(CF_PAYMENTS).ok_or_else(|| {
            PaymentError::IoError(std::io::Error::other(
                "Payments column family not found",
            ))
        })
    }
}

#[async_trait]
impl PaymentStore for RocksDBStore {
    async fn initialize(&self) -> Result<()> {
        self.payments_cf().map(|_| ())
    }

    async fn load_all(&self) -> Result<Payments> {
        let cf = self.payments_cf()?;
        let mut payments = Payments::new();

        for item in self.db.iterator_cf(cf, IteratorMode::Start) {
            let (key, value) = item?;
            let id = String::from_utf8(key.into_vec()).map_err(|e| {
                PaymentError::IoError(std::io::Error::new(
                    std::io::ErrorKind::InvalidData,
                    format!("Payment id is not valid UTF-8: {}", e),
                ))
            })?;
            let payment: Payment = serde_json::from_slice(&value)?;
            payments.insert(id, payment);
        }

        Ok(payments)
    }

    async fn save_all(&self, payments: &Payments) -> Result<()> {
        let cf = self.payments_cf()?;
        let mut batch = WriteBatch::default();

        for item in self.db.iterator_cf(cf, IteratorMode::Start) {
            let (key, _) = item?;
            let stale = !std::str::from_utf8(&key).is_ok_and(|id| payments.contains_key(id));
            if stale {
                batch.delete_cf(cf, &key);
            }
        }
        for (id, payment) in payments {
            batch.put_cf(cf, id.as_bytes(), serde_json::to_vec(payment)?);
        }

        self.db.write(batch)?;
        Ok(())
    }
}
