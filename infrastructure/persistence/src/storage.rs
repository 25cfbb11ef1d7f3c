use std::path::PathBuf;
use std::sync::Arc;
use std::{fs, str::FromStr};

use business::domain::cart::repository::CartRepository;
use thiserror::Error;

use crate::cart::file::JsonFileCartRepository;
use crate::cart::memory::InMemoryCartRepository;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("storage.unknown_backend")]
    UnknownBackend(String),
    #[error("storage.root_unavailable")]
    RootUnavailable,
}

/// Where carts are kept between runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    /// Lost when the process exits.
    Memory,
    File,
}

impl FromStr for StorageBackend {
    type Err = StorageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(StorageBackend::Memory),
            "file" => Ok(StorageBackend::File),
            other => Err(StorageError::UnknownBackend(other.to_string())),
        }
    }
}

/// Configuration for the cart storage backend
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    pub root: PathBuf,
}

impl StorageConfig {
    /// Creates a file-backed configuration rooted at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            backend: StorageBackend::File,
            root: root.into(),
        }
    }
}

/// Opens the configured cart repository
///
/// The file backend needs its root directory to exist, so it is created here.
pub fn open_cart_repository(
    config: &StorageConfig,
) -> Result<Arc<dyn CartRepository>, StorageError> {
    match config.backend {
        StorageBackend::Memory => Ok(Arc::new(InMemoryCartRepository::new())),
        StorageBackend::File => {
            fs::create_dir_all(&config.root).map_err(|e| {
                tracing::error!("Cannot create {}: {e}", config.root.display());
                StorageError::RootUnavailable
            })?;
            Ok(Arc::new(JsonFileCartRepository::new(config.root.clone())))
        }
    }
}
