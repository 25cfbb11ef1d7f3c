use std::sync::Arc;

use crate::application::cart::session::{CartSession, Persist, transition};
use crate::domain::cart::errors::CartError;
use crate::domain::cart::outcome::CartOutcome;
use crate::domain::cart::reducer::CartAction;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::reset::{ResetCartParams, ResetCartUseCase};
use crate::domain::logger::Logger;

pub struct ResetCartUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub session: Arc<CartSession>,
    pub logger: Arc<dyn Logger>,
}

impl ResetCartUseCase for ResetCartUseCaseImpl {
    fn execute(&self, params: ResetCartParams) -> Result<CartOutcome, CartError> {
        self.logger
            .info(&format!("Resetting cart for user {}", params.user_id));

        let outcome = transition(
            &self.session,
            self.repository.as_ref(),
            self.logger.as_ref(),
            &params.user_id,
            CartAction::Reset,
            Persist::Clear,
        )?;

        self.logger
            .info(&format!("Cart reset for user {}", params.user_id));
        Ok(outcome)
    }
}
