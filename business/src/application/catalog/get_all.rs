use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::Product;
use crate::domain::catalog::repository::ProductCatalog;
use crate::domain::catalog::use_cases::get_all::GetAllProductsUseCase;
use crate::domain::logger::Logger;

pub struct GetAllProductsUseCaseImpl {
    pub catalog: Arc<dyn ProductCatalog>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllProductsUseCase for GetAllProductsUseCaseImpl {
    async fn execute(&self) -> Result<Vec<Product>, CatalogError> {
        self.logger.debug("Listing catalog products");

        let products = self.catalog.get_all().await?;
        Ok(products)
    }
}
