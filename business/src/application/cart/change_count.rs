use std::sync::Arc;

use crate::application::cart::session::{CartSession, Persist, transition};
use crate::domain::cart::errors::CartError;
use crate::domain::cart::outcome::CartOutcome;
use crate::domain::cart::reducer::CartAction;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::change_count::{
    ChangeCartItemCountParams, ChangeCartItemCountUseCase,
};
use crate::domain::logger::Logger;

pub struct ChangeCartItemCountUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub session: Arc<CartSession>,
    pub logger: Arc<dyn Logger>,
}

impl ChangeCartItemCountUseCase for ChangeCartItemCountUseCaseImpl {
    fn execute(&self, params: ChangeCartItemCountParams) -> Result<CartOutcome, CartError> {
        self.logger.info(&format!(
            "Setting count of {} to {} for user {}",
            params.item_id, params.count, params.user_id
        ));

        let outcome = transition(
            &self.session,
            self.repository.as_ref(),
            self.logger.as_ref(),
            &params.user_id,
            CartAction::ChangeCount {
                id: params.item_id,
                count: params.count,
            },
            Persist::Write,
        )?;

        self.logger.info(&format!(
            "Cart now holds {} items, total price {}",
            outcome.state.total_count(),
            outcome.state.total_price()
        ));
        Ok(outcome)
    }
}
