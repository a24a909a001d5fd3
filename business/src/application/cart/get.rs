use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::get::{GetCartParams, GetCartUseCase};
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::CartId;

pub struct GetCartUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCartUseCase for GetCartUseCaseImpl {
    async fn execute(&self, params: GetCartParams) -> Result<Option<Cart>, CartError> {
        if params.cart_id.trim().is_empty() {
            return Err(CartError::InvalidCartId);
        }

        self.logger
            .debug(&format!("Fetching cart {}", params.cart_id));

        let cart = self.repository.get(&CartId::new(params.cart_id)).await?;
        Ok(cart)
    }
}
