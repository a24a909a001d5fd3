use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use business::domain::cart::model::Cart;
use business::domain::cart::repository::CartRepository;
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::CartId;

/// In-memory cart store. Carts are cloned in and out whole; the lock only
/// guards map access, so callers serialize their own read-modify-write
/// sequences (the mutating use cases share a mutation lock for that).
#[derive(Default)]
pub struct CartRepositoryInMemory {
    carts: RwLock<HashMap<CartId, Cart>>,
}

impl CartRepositoryInMemory {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CartRepository for CartRepositoryInMemory {
    async fn insert(&self, cart: &Cart) -> Result<(), RepositoryError> {
        let mut carts = self
            .carts
            .write()
            .map_err(|_| RepositoryError::Persistence)?;

        if carts.contains_key(&cart.cart_id) {
            return Err(RepositoryError::Duplicated);
        }

        tracing::debug!(cart_id = %cart.cart_id, "storing new cart");
        carts.insert(cart.cart_id.clone(), cart.clone());
        Ok(())
    }

    async fn get(&self, cart_id: &CartId) -> Result<Option<Cart>, RepositoryError> {
        let carts = self
            .carts
            .read()
            .map_err(|_| RepositoryError::Persistence)?;

        Ok(carts.get(cart_id).cloned())
    }

    async fn save(&self, cart: &Cart) -> Result<(), RepositoryError> {
        let mut carts = self
            .carts
            .write()
            .map_err(|_| RepositoryError::Persistence)?;

        carts.insert(cart.cart_id.clone(), cart.clone());
        Ok(())
    }
}
