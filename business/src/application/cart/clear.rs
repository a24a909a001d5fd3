use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::clear::{ClearCartParams, ClearCartUseCase};
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::CartId;

pub struct ClearCartUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub mutation_lock: Arc<Mutex<()>>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ClearCartUseCase for ClearCartUseCaseImpl {
    async fn execute(&self, params: ClearCartParams) -> Result<Cart, CartError> {
        if params.cart_id.trim().is_empty() {
            return Err(CartError::InvalidCartId);
        }

        self.logger
            .info(&format!("Clearing cart {}", params.cart_id));

        let _guard = self.mutation_lock.lock().await;

        let mut cart = self
            .repository
            .get(&CartId::new(params.cart_id))
            .await?
            .ok_or(CartError::CartNotFound)?;

        cart.clear();

        self.repository.save(&cart).await?;
        Ok(cart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::model::Product;
    use crate::domain::catalog::value_objects::{PlanType, ProductCategory};
    use crate::domain::errors::RepositoryError;
    use crate::domain::shared::value_objects::{CustomerId, ItemId, ProductId};
    use mockall::mock;

    mock! {
        pub CartRepo {}

        #[async_trait]
        impl CartRepository for CartRepo {
            async fn insert(&self, cart: &Cart) -> Result<(), RepositoryError>;
            async fn get(&self, cart_id: &CartId) -> Result<Option<Cart>, RepositoryError>;
            async fn save(&self, cart: &Cart) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn use_case(repository: MockCartRepo) -> ClearCartUseCaseImpl {
        ClearCartUseCaseImpl {
            repository: Arc::new(repository),
            mutation_lock: Arc::new(Mutex::new(())),
            logger: mock_logger(),
        }
    }

    #[tokio::test]
    async fn should_empty_items_and_zero_total_preserving_identity() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo.expect_get().returning(|cart_id| {
            let product = Product::new(
                ProductId::new("plan-basic"),
                "Basic Plan",
                "Basic prepaid plan",
                ProductCategory::Plan,
                PlanType::Prepaid,
                30.0,
            );
            let mut cart = Cart::new(cart_id.clone(), CustomerId::new("test-customer"));
            cart.add_product(ItemId::new("item_1"), &product, 2).unwrap();
            Ok(Some(cart))
        });
        mock_repo.expect_save().returning(|_| Ok(()));

        let cart = use_case(mock_repo)
            .execute(ClearCartParams {
                cart_id: "cart_1".to_string(),
            })
            .await
            .unwrap();

        assert!(cart.items.is_empty());
        assert_eq!(cart.total, 0.0);
        assert_eq!(cart.cart_id.as_str(), "cart_1");
        assert_eq!(cart.customer_id.as_str(), "test-customer");
    }

    #[tokio::test]
    async fn should_fail_when_cart_does_not_exist() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo.expect_get().returning(|_| Ok(None));

        let result = use_case(mock_repo)
            .execute(ClearCartParams {
                cart_id: "cart_999".to_string(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), CartError::CartNotFound));
    }

    #[tokio::test]
    async fn should_reject_blank_cart_id() {
        let result = use_case(MockCartRepo::new())
            .execute(ClearCartParams {
                cart_id: "\t".to_string(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), CartError::InvalidCartId));
    }
}
