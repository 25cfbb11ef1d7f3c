use std::sync::Arc;

use crate::application::cart::session::{CartSession, Persist, transition};
use crate::domain::cart::errors::CartError;
use crate::domain::cart::outcome::CartOutcome;
use crate::domain::cart::reducer::CartAction;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::remove_item::{RemoveCartItemParams, RemoveCartItemUseCase};
use crate::domain::logger::Logger;

pub struct RemoveCartItemUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub session: Arc<CartSession>,
    pub logger: Arc<dyn Logger>,
}

impl RemoveCartItemUseCase for RemoveCartItemUseCaseImpl {
    fn execute(&self, params: RemoveCartItemParams) -> Result<CartOutcome, CartError> {
        self.logger.info(&format!(
            "Removing {} from cart of user {}",
            params.item_id, params.user_id
        ));

        // Unknown ids fall through as a no-op; the list is still re-persisted.
        let outcome = transition(
            &self.session,
            self.repository.as_ref(),
            self.logger.as_ref(),
            &params.user_id,
            CartAction::Remove {
                id: params.item_id,
            },
            Persist::Write,
        )?;

        self.logger.info(&format!(
            "Cart now holds {} lines",
            outcome.state.len()
        ));
        Ok(outcome)
    }
}
