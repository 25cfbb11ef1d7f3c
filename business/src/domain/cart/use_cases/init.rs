use crate::domain::cart::errors::CartError;
use crate::domain::cart::outcome::CartOutcome;
use crate::domain::shared::value_objects::UserId;

/// `user_id` is `None` (or blank) when nobody is signed in.
pub struct InitCartParams {
    pub user_id: Option<UserId>,
}

pub trait InitCartUseCase: Send + Sync {
    fn execute(&self, params: InitCartParams) -> Result<CartOutcome, CartError>;
}
