use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;

pub struct UpdateQuantityParams {
    pub cart_id: String,
    pub item_id: String,
    /// Absolute value; anything below 1 fails with INVALID_QUANTITY.
    pub quantity: i64,
}

#[async_trait]
pub trait UpdateQuantityUseCase: Send + Sync {
    async fn execute(&self, params: UpdateQuantityParams) -> Result<Cart, CartError>;
}
