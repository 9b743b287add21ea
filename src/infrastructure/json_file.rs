use crate::domain::payment::Payments;
use crate::domain::ports::PaymentStore;
use crate::error::{PaymentError, Result};
use async_trait::async_trait;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// A payment store backed by a single JSON document.
///
/// The whole collection is read on every `load_all` and rewritten on every
/// `save_all`. The document is a JSON object keyed by payment id.
///
/// Writes go to a temporary file in the same directory which is then renamed
/// over the document, so readers always see a complete collection.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn encode(payments: &Payments) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
        payments.serialize(&mut serializer)?;
        Ok(buf)
    }

    fn directory(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    async fn replace_document(&self, bytes: Vec<u8>) -> Result<()> {
        let dir = self.directory().to_path_buf();
        let path = self.path.clone();

        tokio::task::spawn_blocking(move || -> Result<()> {
            let mut file = NamedTempFile::new_in(dir)?;
            file.write_all(&bytes)?;
            file.flush()?;
            file.persist(&path).map_err(|e| e.error)?;
            Ok(())
        })
        .await
        .map_err(|e| PaymentError::IoError(std::io::Error::other(e)))?
    }
}

#[async_trait]
impl PaymentStore for JsonFileStore {
    /// Creates the file with an empty collection if it does not exist yet.
    async fn initialize(&self) -> Result<()> {
        if tokio::fs::try_exists(&self.path).await? {
            debug!(path = %self.path.display(), "data file already present");
            return Ok(());
        }
        tokio::fs::create_dir_all(self.directory()).await?;
        self.replace_document(Self::encode(&Payments::new())?).await?;
        info!(path = %self.path.display(), "created empty data file");
        Ok(())
    }

    async fn load_all(&self) -> Result<Payments> {
        let bytes = tokio::fs::read(&self.path).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn save_all(&self, payments: &Payments) -> Result<()> {
        self.replace_document(Self::encode(payments)?).await
    }
}
