use std::env;

use persistence::storage::{StorageBackend, StorageConfig, StorageError};

pub const DEFAULT_STORAGE_DIR: &str = ".cart-storage";

/// Load cart storage configuration from environment variables
///
/// Environment variables:
/// - CART_STORAGE_BACKEND: "file" or "memory" (default: "file")
/// - CART_STORAGE_DIR: Directory holding one JSON file per user (default: ".cart-storage")
pub fn from_env() -> Result<StorageConfig, StorageError> {
    from_values(
        env::var("CART_STORAGE_BACKEND").ok(),
        env::var("CART_STORAGE_DIR").ok(),
    )
}

/// Build the storage configuration from raw, possibly missing values
pub fn from_values(
    backend: Option<String>,
    dir: Option<String>,
) -> Result<StorageConfig, StorageError> {
    let backend = match backend {
        Some(name) if !name.trim().is_empty() => name.parse()?,
        _ => StorageBackend::File,
    };
    let root = dir
        .filter(|d| !d.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_STORAGE_DIR.to_string());

    Ok(StorageConfig {
        backend,
        root: root.into(),
    })
}
