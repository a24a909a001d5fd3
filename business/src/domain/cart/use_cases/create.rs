use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;

pub struct CreateCartParams {
    pub customer_id: String,
}

#[async_trait]
pub trait CreateCartUseCase: Send + Sync {
    async fn execute(&self, params: CreateCartParams) -> Result<Cart, CartError>;
}
