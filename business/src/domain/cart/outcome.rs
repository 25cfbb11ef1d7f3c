use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::CartState;

/// A storage failure that did not stop the in-memory cart from changing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistenceWarning {
    pub user_id: UserId,
    pub error: RepositoryError,
}

impl std::fmt::Display for PersistenceWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (user {})", self.error, self.user_id)
    }
}

/// Result of a cart operation: the state after it ran, plus any storage warning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartOutcome {
    pub state: CartState,
    pub warning: Option<PersistenceWarning>,
}

impl CartOutcome {
    pub fn new(state: CartState) -> Self {
        Self {
            state,
            warning: None,
        }
    }

    pub fn with_warning(state: CartState, warning: PersistenceWarning) -> Self {
        Self {
            state,
            warning: Some(warning),
        }
    }
}
