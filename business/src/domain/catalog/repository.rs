use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::ProductId;

use super::model::Product;

/// Read-only catalog port. An unknown product id yields `Ok(None)`, never a
/// store error; the cart use cases translate absence into their own
/// not-found condition.
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    async fn get(&self, product_id: &ProductId) -> Result<Option<Product>, RepositoryError>;
    /// Full listing in seed insertion order.
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
}
