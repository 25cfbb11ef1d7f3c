use std::collections::HashMap;
use std::sync::RwLock;

use business::domain::cart::model::LineItem;
use business::domain::cart::repository::CartRepository;
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::UserId;

use super::entity::CartRecord;

/// String-valued key-value store, shaped like browser local storage.
///
/// An optional byte quota makes oversize writes fail the way a full
/// storage area does.
#[derive(Debug, Default)]
pub struct InMemoryCartRepository {
    entries: RwLock<HashMap<String, String>>,
    quota: Option<usize>,
}

impl InMemoryCartRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quota(quota: usize) -> Self {
        Self {
            entries: RwLock::default(),
            quota: Some(quota),
        }
    }

    pub fn storage_key(user_id: &UserId) -> String {
        format!("cart_{}", user_id.as_str())
    }

    /// Raw stored value, mainly for inspection in tests.
    pub fn raw(&self, user_id: &UserId) -> Option<String> {
        self.entries
            .read()
            .ok()?
            .get(&Self::storage_key(user_id))
            .cloned()
    }

    pub fn insert_raw(&self, user_id: &UserId, value: String) -> Result<(), RepositoryError> {
        self.entries
            .write()
            .map_err(|_| RepositoryError::Unavailable)?
            .insert(Self::storage_key(user_id), value);
        Ok(())
    }
}

impl CartRepository for InMemoryCartRepository {
    fn read(&self, user_id: &UserId) -> Result<Vec<LineItem>, RepositoryError> {
        let entries = self
            .entries
            .read()
            .map_err(|_| RepositoryError::Unavailable)?;

        match entries.get(&Self::storage_key(user_id)) {
            Some(raw) => CartRecord::decode(raw)?.into_items(user_id),
            None => Ok(Vec::new()),
        }
    }

    fn write(&self, user_id: &UserId, items: &[LineItem]) -> Result<(), RepositoryError> {
        let key = Self::storage_key(user_id);
        let value = CartRecord::new(user_id, items).encode()?;

        let mut entries = self
            .entries
            .write()
            .map_err(|_| RepositoryError::Unavailable)?;

        if let Some(quota) = self.quota {
            let used: usize = entries
                .iter()
                .filter(|(k, _)| **k != key)
                .map(|(k, v)| k.len() + v.len())
                .sum();
            if used + key.len() + value.len() > quota {
                tracing::warn!("Cart storage quota of {quota} bytes exceeded for user {user_id}");
                return Err(RepositoryError::Persistence);
            }
        }

        entries.insert(key, value);
        Ok(())
    }

    fn clear(&self, user_id: &UserId) -> Result<(), RepositoryError> {
        self.entries
            .write()
            .map_err(|_| RepositoryError::Unavailable)?
            .remove(&Self::storage_key(user_id));
        Ok(())
    }
}
