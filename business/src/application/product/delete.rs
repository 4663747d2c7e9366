use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};

pub struct DeleteProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteProductUseCase for DeleteProductUseCaseImpl {
    async fn execute(&self, params: DeleteProductParams) -> Result<(), ProductError> {
        self.logger
            .info(&format!("Deleting product: {}", params.id));

        // The repository ignores missing ids; callers of this use case get a NotFound.
        if !self.repository.exists_by_id(params.id).await? {
            return Err(ProductError::NotFound);
        }

        self.repository.delete_by_id(params.id).await?;

        self.logger.info(&format!("Product deleted: {}", params.id));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repository::CrudRepository;
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::model::Product;
    use crate::domain::shared::paging::{Page, PageRequest, Sort};
    use mockall::mock;

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl CrudRepository<Product, i64> for ProductRepo {
            async fn save(&self, entity: Product) -> Result<Product, RepositoryError>;
            async fn find_by_id(&self, id: i64) -> Result<Option<Product>, RepositoryError>;
            async fn find_all(&self) -> Result<Vec<Product>, RepositoryError>;
            async fn find_all_sorted(&self, sort: Sort) -> Result<Vec<Product>, RepositoryError>;
            async fn find_page(&self, page: PageRequest, sort: Option<Sort>) -> Result<Page<Product>, RepositoryError>;
            async fn exists_by_id(&self, id: i64) -> Result<bool, RepositoryError>;
            async fn delete_by_id(&self, id: i64) -> Result<(), RepositoryError>;
            async fn count(&self) -> Result<u64, RepositoryError>;
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

    #[tokio::test]
    async fn should_delete_product_when_exists() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_exists_by_id()
            .withf(|id| *id == 3)
            .returning(|_| Ok(true));
        mock_repo
            .expect_delete_by_id()
            .withf(|id| *id == 3)
            .times(1)
            .returning(|_| Ok(()));

        let use_case = DeleteProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(DeleteProductParams { id: 3 }).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_return_not_found_when_deleting_nonexistent_product() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_exists_by_id().returning(|_| Ok(false));
        mock_repo.expect_delete_by_id().never();

        let use_case = DeleteProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(DeleteProductParams { id: 99 }).await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ProductError::NotFound));
    }

    #[tokio::test]
    async fn should_propagate_storage_error_when_delete_fails() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_exists_by_id().returning(|_| Ok(true));
        mock_repo
            .expect_delete_by_id()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let use_case = DeleteProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(DeleteProductParams { id: 3 }).await;

        assert!(matches!(
            result.unwrap_err(),
            ProductError::Repository(RepositoryError::DatabaseError)
        ));
    }
}
