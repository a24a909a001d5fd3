use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::id_generator::IdGenerator;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::create::{CreateCartParams, CreateCartUseCase};
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::CustomerId;

pub struct CreateCartUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub id_generator: Arc<dyn IdGenerator>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateCartUseCase for CreateCartUseCaseImpl {
    async fn execute(&self, params: CreateCartParams) -> Result<Cart, CartError> {
        if params.customer_id.trim().is_empty() {
            return Err(CartError::InvalidCustomerId);
        }

        let cart = Cart::new(
            self.id_generator.next_cart_id(),
            CustomerId::new(params.customer_id),
        );

        self.repository.insert(&cart).await?;

        self.logger.info(&format!(
            "Created cart {} for customer {}",
            cart.cart_id, cart.customer_id
        ));
        Ok(cart)
    }
}
