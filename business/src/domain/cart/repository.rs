use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::LineItem;

/// Synchronous key-value store holding one serialized cart per user.
pub trait CartRepository: Send + Sync {
    /// Returns the stored items, or an empty list when nothing is stored.
    fn read(&self, user_id: &UserId) -> Result<Vec<LineItem>, RepositoryError>;
    /// Overwrites the stored items for `user_id`.
    fn write(&self, user_id: &UserId, items: &[LineItem]) -> Result<(), RepositoryError>;
    /// Removes the stored record. Clearing a missing record is not an error.
    fn clear(&self, user_id: &UserId) -> Result<(), RepositoryError>;
}
