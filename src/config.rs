use crate::domain::ports::PaymentStoreBox;
use crate::error::Result;
use crate::infrastructure::in_memory::InMemoryPaymentStore;
use crate::infrastructure::json_file::JsonFileStore;
use clap::Parser;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use tracing::{info, warn};

/// Payment lifecycle HTTP service.
///
/// Every option can also be supplied through the environment (or a `.env`
/// file in the working directory).
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct ServerConfig {
    /// Address to bind the HTTP listener to
    #[arg(long, env = "PAYMENTS_HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    /// Port to bind the HTTP listener to
    #[arg(long, env = "PAYMENTS_PORT", default_value_t = 8000)]
    pub port: u16,

    /// JSON document holding all payments
    #[arg(long, env = "PAYMENTS_DATA_PATH", default_value = "data.json")]
    pub data_path: PathBuf,

    /// Path to persistent database (optional). If provided, uses RocksDB.
    #[arg(long, env = "PAYMENTS_DB_PATH")]
    pub db_path: Option<PathBuf>,

    /// Keep payments in memory only; nothing survives a restart
    #[arg(long, conflicts_with = "db_path")]
    pub in_memory: bool,

    /// Request timeout in seconds
    #[arg(long, env = "PAYMENTS_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout_secs: u64,

    /// Maximum request body size in kilobytes
    #[arg(long, env = "PAYMENTS_BODY_LIMIT_KB", default_value_t = 64)]
    pub body_limit_kb: usize,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Builds the store selected by the storage flags.
    ///
    /// `--in-memory` wins, then `--db-path` (RocksDB, when compiled with the
    /// `storage-rocksdb` feature), then the JSON document at `--data-path`.
    pub fn payment_store(&self) -> Result<PaymentStoreBox> {
        if self.in_memory {
            warn!("Using in-memory storage; payments will not survive a restart");
            return Ok(Box::new(InMemoryPaymentStore::new()));
        }

        if let Some(db_path) = &self.db_path {
            #[cfg(feature = "storage-rocksdb")]
            {
                use crate::infrastructure::rocksdb::RocksDBStore;

                let store = RocksDBStore::open(db_path)?;
                info!(path = %db_path.display(), "Using RocksDB storage");
                return Ok(Box::new(store));
            }

            #[cfg(not(feature = "storage-rocksdb"))]
            warn!(
                path = %db_path.display(),
                "Persistent storage requested via --db-path, but 'storage-rocksdb' feature is not enabled. Falling back to JSON file storage."
            );
        }

        info!(path = %self.data_path.display(), "Using JSON file storage");
        Ok(Box::new(JsonFileStore::new(&self.data_path)))
    }
}
