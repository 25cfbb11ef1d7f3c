use persistence::storage::StorageConfig;

use super::storage_config;

pub struct AppConfig {
    pub storage: StorageConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            storage: storage_config::from_env()?,
        })
    }
}
