//! JSON file repository adapter.
//!
//! Reads a JSON array of payments on every call. The file is never written.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use payments_types::{Payment, PaymentRepository, RepoError};

/// Repository backed by a JSON snapshot file.
#[derive(Debug, Clone)]
pub struct JsonFilePaymentRepository {
    path: PathBuf,
}

impl JsonFilePaymentRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path this repository reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PaymentRepository for JsonFilePaymentRepository {
    #[tracing::instrument(skip(self), fields(path = %self.path.display()))]
    fn find_all(&self) -> Result<Vec<Payment>, RepoError> {
        let file = File::open(&self.path).map_err(|e| {
            tracing::error!("Failed to open payment file: {}", e);
            RepoError::Io(e)
        })?;

        let payments: Vec<Payment> =
            serde_json::from_reader(BufReader::new(file)).map_err(|e| {
                tracing::error!("Failed to parse payment file: {}", e);
                RepoError::Parse(e.to_string())
            })?;

        tracing::debug!(count = payments.len(), "loaded payments");
        Ok(payments)
    }
}
