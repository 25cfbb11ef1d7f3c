use std::sync::Arc;

use crate::application::cart::session::{CartSession, settle};
use crate::domain::cart::errors::CartError;
use crate::domain::cart::outcome::CartOutcome;
use crate::domain::cart::reducer::{CartAction, reduce};
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::init::{InitCartParams, InitCartUseCase};
use crate::domain::logger::Logger;

pub struct InitCartUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub session: Arc<CartSession>,
    pub logger: Arc<dyn Logger>,
}

impl InitCartUseCase for InitCartUseCaseImpl {
    fn execute(&self, params: InitCartParams) -> Result<CartOutcome, CartError> {
        // No signed-in user: leave whatever is in memory alone.
        let Some(user_id) = params.user_id.filter(|id| !id.is_blank()) else {
            self.logger.debug("Skipping cart init without a user id");
            return Ok(CartOutcome::new(self.session.snapshot()));
        };

        self.logger
            .info(&format!("Loading cart for user {}", user_id));

        let mut guard = self.session.lock();
        match self.repository.read(&user_id) {
            Ok(items) => {
                let next = reduce(&guard, CartAction::Load(items))?;
                *guard = next.clone();
                self.logger.info(&format!(
                    "Loaded {} cart lines for user {}",
                    next.len(),
                    user_id
                ));
                Ok(CartOutcome::new(next))
            }
            Err(error) => settle(self.logger.as_ref(), &user_id, guard.clone(), Err(error)),
        }
    }
}
