use crate::domain::cart::errors::CartError;
use crate::domain::cart::outcome::CartOutcome;
use crate::domain::cart::value_objects::ProductId;
use crate::domain::shared::value_objects::UserId;

pub struct RemoveCartItemParams {
    pub item_id: ProductId,
    pub user_id: UserId,
}

pub trait RemoveCartItemUseCase: Send + Sync {
    fn execute(&self, params: RemoveCartItemParams) -> Result<CartOutcome, CartError>;
}
