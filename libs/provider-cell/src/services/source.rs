use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

use crate::models::Provider;

#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("Failed to read providers data from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed providers data in {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Read-only collection the directory is loaded from. Only a full load is
/// required; there is no query pushdown.
#[async_trait]
pub trait ProviderSource: Send + Sync {
    async fn load_providers(&self) -> Result<Vec<Provider>, DirectoryError>;
}

/// Provider collection stored as a JSON array on disk.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ProviderSource for JsonFileSource {
    async fn load_providers(&self) -> Result<Vec<Provider>, DirectoryError> {
        debug!("Reading providers data from {}", self.path.display());

        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| DirectoryError::Io {
                path: self.path.clone(),
                source,
            })?;

        serde_json::from_slice(&bytes).map_err(|source| DirectoryError::Malformed {
            path: self.path.clone(),
            source,
        })
    }
}
