use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartItemPayload;
use crate::domain::cart::outcome::CartOutcome;
use crate::domain::shared::value_objects::UserId;

pub struct AddCartItemParams {
    pub item: CartItemPayload,
    pub user_id: UserId,
    pub count: i64,
}

pub trait AddCartItemUseCase: Send + Sync {
    fn execute(&self, params: AddCartItemParams) -> Result<CartOutcome, CartError>;
}
