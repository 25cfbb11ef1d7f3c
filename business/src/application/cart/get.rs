use std::sync::Arc;

use crate::application::cart::session::CartSession;
use crate::domain::cart::model::CartState;
use crate::domain::cart::use_cases::get::GetCartUseCase;

pub struct GetCartUseCaseImpl {
    pub session: Arc<CartSession>,
}

impl GetCartUseCase for GetCartUseCaseImpl {
    fn execute(&self) -> CartState {
        self.session.snapshot()
    }
}
