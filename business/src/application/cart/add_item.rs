use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::id_generator::IdGenerator;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::add_item::{AddItemParams, AddItemUseCase};
use crate::domain::catalog::repository::ProductCatalog;
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::{CartId, ProductId};

pub struct AddItemUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub catalog: Arc<dyn ProductCatalog>,
    pub id_generator: Arc<dyn IdGenerator>,
    /// Store-wide lock serializing get-mutate-save sequences across the
    /// mutating use cases; shared with update/remove/clear.
    pub mutation_lock: Arc<Mutex<()>>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddItemUseCase for AddItemUseCaseImpl {
    async fn execute(&self, params: AddItemParams) -> Result<Cart, CartError> {
        if params.cart_id.trim().is_empty() {
            return Err(CartError::InvalidCartId);
        }

        self.logger.info(&format!(
            "Adding product {} (x{}) to cart {}",
            params.product_id, params.quantity, params.cart_id
        ));

        let _guard = self.mutation_lock.lock().await;

        let mut cart = self
            .repository
            .get(&CartId::new(params.cart_id))
            .await?
            .ok_or(CartError::CartNotFound)?;

        let product = self
            .catalog
            .get(&ProductId::new(params.product_id))
            .await?
            .ok_or(CartError::ProductNotFound)?;

        cart.add_product(self.id_generator.next_item_id(), &product, params.quantity)?;

        self.repository.save(&cart).await?;

        self.logger.info(&format!(
            "Cart {} now holds {} item(s), total {}",
            cart.cart_id,
            cart.items.len(),
            cart.total
        ));
        Ok(cart)
    }
}
