use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::CartId;

use super::model::Cart;

/// Cart store port. Carts are stored whole; `save` replaces the previous
/// state of the same id. There is no delete: clearing a cart keeps the
/// entity in the store.
#[async_trait]
pub trait CartRepository: Send + Sync {
    /// Fails with `RepositoryError::Duplicated` if the id is already taken.
    async fn insert(&self, cart: &Cart) -> Result<(), RepositoryError>;
    async fn get(&self, cart_id: &CartId) -> Result<Option<Cart>, RepositoryError>;
    async fn save(&self, cart: &Cart) -> Result<(), RepositoryError>;
}
