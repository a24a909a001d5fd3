use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::remove_item::{RemoveItemParams, RemoveItemUseCase};
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::{CartId, ItemId};

pub struct RemoveItemUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub mutation_lock: Arc<Mutex<()>>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveItemUseCase for RemoveItemUseCaseImpl {
    async fn execute(&self, params: RemoveItemParams) -> Result<Cart, CartError> {
        if params.cart_id.trim().is_empty() {
            return Err(CartError::InvalidCartId);
        }
        if params.item_id.trim().is_empty() {
            return Err(CartError::InvalidItemId);
        }

        self.logger.info(&format!(
            "Removing item {} from cart {}",
            params.item_id, params.cart_id
        ));

        let _guard = self.mutation_lock.lock().await;

        let mut cart = self
            .repository
            .get(&CartId::new(params.cart_id))
            .await?
            .ok_or(CartError::CartNotFound)?;

        cart.remove_item(&ItemId::new(params.item_id))?;

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
    use crate::domain::shared::value_objects::{CustomerId, ProductId};
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

    fn postpaid_cart(cart_id: &CartId) -> Cart {
        let unlimited = Product::new(
            ProductId::new("plan-unlimited"),
            "Unlimited Plan",
            "Unlimited postpaid plan",
            ProductCategory::Plan,
            PlanType::Postpaid,
            80.0,
        );
        let phone = Product::new(
            ProductId::new("device-phone"),
            "Smartphone",
            "Latest smartphone",
            ProductCategory::Device,
            PlanType::Postpaid,
            500.0,
        );
        let mut cart = Cart::new(cart_id.clone(), CustomerId::new("test-customer"));
        cart.add_product(ItemId::new("item_1"), &unlimited, 1).unwrap();
        cart.add_product(ItemId::new("item_2"), &phone, 1).unwrap();
        cart
    }

    fn use_case(repository: MockCartRepo) -> RemoveItemUseCaseImpl {
        RemoveItemUseCaseImpl {
            repository: Arc::new(repository),
            mutation_lock: Arc::new(Mutex::new(())),
            logger: mock_logger(),
        }
    }

    #[tokio::test]
    async fn should_remove_item_and_recompute_total() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo
            .expect_get()
            .returning(|cart_id| Ok(Some(postpaid_cart(cart_id))));
        mock_repo.expect_save().returning(|_| Ok(()));

        let cart = use_case(mock_repo)
            .execute(RemoveItemParams {
                cart_id: "cart_1".to_string(),
                item_id: "item_2".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].item_id.as_str(), "item_1");
        assert_eq!(cart.total, 80.0);
    }

    #[tokio::test]
    async fn should_fail_when_item_is_not_in_cart() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo
            .expect_get()
            .returning(|cart_id| Ok(Some(postpaid_cart(cart_id))));

        let result = use_case(mock_repo)
            .execute(RemoveItemParams {
                cart_id: "cart_1".to_string(),
                item_id: "item_42".to_string(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), CartError::ItemNotFound));
    }

    #[tokio::test]
    async fn should_reject_blank_ids_before_lookup() {
        let result = use_case(MockCartRepo::new())
            .execute(RemoveItemParams {
                cart_id: "".to_string(),
                item_id: "item_1".to_string(),
            })
            .await;
        assert!(matches!(result.unwrap_err(), CartError::InvalidCartId));

        let result = use_case(MockCartRepo::new())
            .execute(RemoveItemParams {
                cart_id: "cart_1".to_string(),
                item_id: "   ".to_string(),
            })
            .await;
        assert!(matches!(result.unwrap_err(), CartError::InvalidItemId));
    }

    #[tokio::test]
    async fn should_fail_when_cart_does_not_exist() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo.expect_get().returning(|_| Ok(None));

        let result = use_case(mock_repo)
            .execute(RemoveItemParams {
                cart_id: "cart_999".to_string(),
                item_id: "item_1".to_string(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), CartError::CartNotFound));
    }
}
