use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;

pub struct AddItemParams {
    pub cart_id: String,
    pub product_id: String,
    /// Taken as-is; the boundary layer's JSON parsing guarantees an integer
    /// but the add path does not re-check its sign.
    pub quantity: i64,
}

#[async_trait]
pub trait AddItemUseCase: Send + Sync {
    async fn execute(&self, params: AddItemParams) -> Result<Cart, CartError>;
}
