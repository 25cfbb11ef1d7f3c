use crate::domain::cart::errors::CartError;
use crate::domain::cart::outcome::CartOutcome;
use crate::domain::shared::value_objects::UserId;

pub struct ResetCartParams {
    pub user_id: UserId,
}

pub trait ResetCartUseCase: Send + Sync {
    fn execute(&self, params: ResetCartParams) -> Result<CartOutcome, CartError>;
}
