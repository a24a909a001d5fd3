use async_trait::async_trait;

use business::domain::catalog::model::Product;
use business::domain::catalog::repository::ProductCatalog;
use business::domain::catalog::value_objects::{PlanType, ProductCategory};
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::ProductId;

/// Read-only catalog seeded at construction. The `Vec` keeps seed insertion
/// order, which is the order `get_all` must return.
pub struct ProductCatalogInMemory {
    products: Vec<Product>,
}

impl ProductCatalogInMemory {
    /// Catalog with the fixed telecom product seed. Ids, names, plan types,
    /// and prices are part of the API contract and must not change.
    pub fn with_seed_products() -> Self {
        Self {
            products: vec![
                Product::new(
                    ProductId::new("plan-basic"),
                    "Basic Plan",
                    "Basic prepaid plan",
                    ProductCategory::Plan,
                    PlanType::Prepaid,
                    30.0,
                ),
                Product::new(
                    ProductId::new("plan-unlimited"),
                    "Unlimited Plan",
                    "Unlimited postpaid plan",
                    ProductCategory::Plan,
                    PlanType::Postpaid,
                    80.0,
                ),
                Product::new(
                    ProductId::new("device-phone"),
                    "Smartphone",
                    "Latest smartphone",
                    ProductCategory::Device,
                    PlanType::Postpaid,
                    500.0,
                ),
            ],
        }
    }
}

#[async_trait]
impl ProductCatalog for ProductCatalogInMemory {
    async fn get(&self, product_id: &ProductId) -> Result<Option<Product>, RepositoryError> {
        Ok(self
            .products
            .iter()
            .find(|product| &product.product_id == product_id)
            .cloned())
    }

    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        Ok(self.products.clone())
    }
}
