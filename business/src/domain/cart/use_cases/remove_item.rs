use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;

pub struct RemoveItemParams {
    pub cart_id: String,
    pub item_id: String,
}

#[async_trait]
pub trait RemoveItemUseCase: Send + Sync {
    async fn execute(&self, params: RemoveItemParams) -> Result<Cart, CartError>;
}
