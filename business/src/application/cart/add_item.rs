use std::sync::Arc;

use crate::application::cart::session::{CartSession, Persist, transition};
use crate::domain::cart::errors::CartError;
use crate::domain::cart::outcome::CartOutcome;
use crate::domain::cart::reducer::CartAction;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::add_item::{AddCartItemParams, AddCartItemUseCase};
use crate::domain::logger::Logger;

pub struct AddCartItemUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub session: Arc<CartSession>,
    pub logger: Arc<dyn Logger>,
}

impl AddCartItemUseCase for AddCartItemUseCaseImpl {
    fn execute(&self, params: AddCartItemParams) -> Result<CartOutcome, CartError> {
        self.logger.info(&format!(
            "Adding {} x {} to cart of user {}",
            params.count, params.item.id, params.user_id
        ));

        let outcome = transition(
            &self.session,
            self.repository.as_ref(),
            self.logger.as_ref(),
            &params.user_id,
            CartAction::Add {
                item: params.item,
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
