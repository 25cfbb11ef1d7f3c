use crate::domain::cart::errors::CartError;
use crate::domain::cart::outcome::CartOutcome;
use crate::domain::cart::value_objects::ProductId;
use crate::domain::shared::value_objects::UserId;

/// `count` replaces the current count; it is not a delta.
pub struct ChangeCartItemCountParams {
    pub item_id: ProductId,
    pub count: i64,
    pub user_id: UserId,
}

pub trait ChangeCartItemCountUseCase: Send + Sync {
    fn execute(&self, params: ChangeCartItemCountParams) -> Result<CartOutcome, CartError>;
}
