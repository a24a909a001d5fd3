use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::update_quantity::{
    UpdateQuantityParams, UpdateQuantityUseCase,
};
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::{CartId, ItemId};

pub struct UpdateQuantityUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub mutation_lock: Arc<Mutex<()>>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateQuantityUseCase for UpdateQuantityUseCaseImpl {
    async fn execute(&self, params: UpdateQuantityParams) -> Result<Cart, CartError> {
        if params.cart_id.trim().is_empty() {
            return Err(CartError::InvalidCartId);
        }
        if params.item_id.trim().is_empty() {
            return Err(CartError::InvalidItemId);
        }
        // Strict side of the add/update asymmetry: the set path requires a
        // positive quantity before any store access.
        if params.quantity <= 0 {
            return Err(CartError::InvalidQuantity);
        }

        self.logger.info(&format!(
            "Setting quantity of item {} in cart {} to {}",
            params.item_id, params.cart_id, params.quantity
        ));

        let _guard = self.mutation_lock.lock().await;

        let mut cart = self
            .repository
            .get(&CartId::new(params.cart_id))
            .await?
            .ok_or(CartError::CartNotFound)?;

        cart.update_item_quantity(&ItemId::new(params.item_id), params.quantity)?;

        self.repository.save(&cart).await?;
        Ok(cart)
    }
}
