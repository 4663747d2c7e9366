use std::sync::Arc;

use logger::TracingLogger;
use persistence::memory::repository::InMemoryRepository;
use persistence::product::repository::ProductRepositoryPostgres;

use business::application::product::count::CountProductsUseCaseImpl;
use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;
use business::domain::product::model::Product;
use business::domain::product::repository::ProductRepository;

use crate::config::{database_config, storage_config::StorageConfig};

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub product_api: crate::api::product::routes::ProductApi,
}

impl DependencyContainer {
    /// Builds the product repository for the configured backend, then wires it.
    pub async fn from_storage(storage: &StorageConfig) -> anyhow::Result<Self> {
        let repository: Arc<dyn ProductRepository> = match storage {
            StorageConfig::Postgres(db_config) => {
                let pool = database_config::init_database(db_config).await?;
                Arc::new(ProductRepositoryPostgres::new(pool))
            }
            StorageConfig::Memory => {
                tracing::warn!("Using in-memory product store; data will not survive a restart");
                Arc::new(InMemoryRepository::<Product>::new())
            }
        };

        Ok(Self::new(repository))
    }

    pub fn new(product_repository: Arc<dyn ProductRepository>) -> Self {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        let create_use_case = Arc::new(CreateProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_all_use_case = Arc::new(GetAllProductsUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_by_id_use_case = Arc::new(GetProductByIdUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let update_use_case = Arc::new(UpdateProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let delete_use_case = Arc::new(DeleteProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let count_use_case = Arc::new(CountProductsUseCaseImpl {
            repository: product_repository,
            logger,
        });

        let product_api = crate::api::product::routes::ProductApi::new(
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
            count_use_case,
        );

        Self {
            health_api,
            product_api,
        }
    }
}
