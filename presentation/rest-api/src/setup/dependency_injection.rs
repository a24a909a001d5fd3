use std::sync::Arc;

use tokio::sync::Mutex;

use logger::TracingLogger;
use persistence::cart::id_generator::SequentialIdGenerator;
use persistence::cart::repository::CartRepositoryInMemory;
use persistence::catalog::repository::ProductCatalogInMemory;

use business::application::cart::add_item::AddItemUseCaseImpl;
use business::application::cart::clear::ClearCartUseCaseImpl;
use business::application::cart::create::CreateCartUseCaseImpl;
use business::application::cart::get::GetCartUseCaseImpl;
use business::application::cart::remove_item::RemoveItemUseCaseImpl;
use business::application::cart::update_quantity::UpdateQuantityUseCaseImpl;
use business::application::catalog::get_all::GetAllProductsUseCaseImpl;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub cart_api: crate::api::cart::routes::CartApi,
    pub catalog_api: crate::api::catalog::routes::CatalogApi,
}

impl DependencyContainer {
    pub fn new() -> Self {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // In-memory adapters. All state lives here, constructor-injected so
        // every container owns an isolated store.
        let cart_repository = Arc::new(CartRepositoryInMemory::new());
        let catalog = Arc::new(ProductCatalogInMemory::with_seed_products());
        let id_generator = Arc::new(SequentialIdGenerator::new());

        // One mutation lock per cart store: serializes the get-mutate-save
        // sequences of the four mutating use cases.
        let mutation_lock = Arc::new(Mutex::new(()));

        // Cart use cases
        let create_use_case = Arc::new(CreateCartUseCaseImpl {
            repository: cart_repository.clone(),
            id_generator: id_generator.clone(),
            logger: logger.clone(),
        });
        let get_use_case = Arc::new(GetCartUseCaseImpl {
            repository: cart_repository.clone(),
            logger: logger.clone(),
        });
        let add_item_use_case = Arc::new(AddItemUseCaseImpl {
            repository: cart_repository.clone(),
            catalog: catalog.clone(),
            id_generator,
            mutation_lock: mutation_lock.clone(),
            logger: logger.clone(),
        });
        let update_quantity_use_case = Arc::new(UpdateQuantityUseCaseImpl {
            repository: cart_repository.clone(),
            mutation_lock: mutation_lock.clone(),
            logger: logger.clone(),
        });
        let remove_item_use_case = Arc::new(RemoveItemUseCaseImpl {
            repository: cart_repository.clone(),
            mutation_lock: mutation_lock.clone(),
            logger: logger.clone(),
        });
        let clear_use_case = Arc::new(ClearCartUseCaseImpl {
            repository: cart_repository,
            mutation_lock,
            logger: logger.clone(),
        });

        // Catalog use cases
        let get_all_products_use_case = Arc::new(GetAllProductsUseCaseImpl { catalog, logger });

        let cart_api = crate::api::cart::routes::CartApi::new(
            create_use_case,
            get_use_case,
            add_item_use_case,
            update_quantity_use_case,
            remove_item_use_case,
            clear_use_case,
        );

        let catalog_api =
            crate::api::catalog::routes::CatalogApi::new(get_all_products_use_case);

        Self {
            health_api,
            cart_api,
            catalog_api,
        }
    }
}

impl Default for DependencyContainer {
    fn default() -> Self {
        Self::new()
    }
}
