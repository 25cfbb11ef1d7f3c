use crate::domain::cart::model::CartState;

pub trait GetCartUseCase: Send + Sync {
    fn execute(&self) -> CartState;
}
