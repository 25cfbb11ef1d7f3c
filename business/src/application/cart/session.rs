use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartState;
use crate::domain::cart::outcome::{CartOutcome, PersistenceWarning};
use crate::domain::cart::reducer::{CartAction, reduce};
use crate::domain::cart::repository::CartRepository;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::UserId;

/// In-memory cart owned by one user session.
///
/// The lock is held for the whole reduce, commit and persist sequence, so
/// two mutations on the same session never interleave.
#[derive(Debug, Default)]
pub struct CartSession {
    state: Mutex<CartState>,
}

impl CartSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> CartState {
        self.lock().clone()
    }

    pub(crate) fn lock(&self) -> MutexGuard<'_, CartState> {
        // State is only ever replaced wholesale, so a poisoned guard still
        // holds a consistent cart.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// What to do with storage once the new state is committed.
pub(crate) enum Persist {
    Write,
    Clear,
}

/// Reduces `action` into the session, then mirrors the result to storage.
pub(crate) fn transition(
    session: &CartSession,
    repository: &dyn CartRepository,
    logger: &dyn Logger,
    user_id: &UserId,
    action: CartAction,
    persist: Persist,
) -> Result<CartOutcome, CartError> {
    let mut guard = session.lock();
    let next = reduce(&guard, action).inspect_err(|e| {
        logger.warn(&format!("Cart change rejected for user {}: {}", user_id, e));
    })?;
    *guard = next.clone();

    let stored = match persist {
        Persist::Write => repository.write(user_id, next.items()),
        Persist::Clear => repository.clear(user_id),
    };

    settle(logger, user_id, next, stored)
}

/// Turns a storage result into an outcome for an already committed state.
pub(crate) fn settle(
    logger: &dyn Logger,
    user_id: &UserId,
    state: CartState,
    stored: Result<(), RepositoryError>,
) -> Result<CartOutcome, CartError> {
    match stored {
        Ok(()) => Ok(CartOutcome::new(state)),
        Err(error) if error.is_recoverable() => {
            logger.warn(&format!(
                "Cart for user {} kept in memory only: {}",
                user_id, error
            ));
            Ok(CartOutcome::with_warning(
                state,
                PersistenceWarning {
                    user_id: user_id.clone(),
                    error,
                },
            ))
        }
        Err(error) => {
            logger.error(&format!("Cart storage failed for user {}: {}", user_id, error));
            Err(CartError::Repository(error))
        }
    }
}
