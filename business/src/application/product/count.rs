use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::count::CountProductsUseCase;

pub struct CountProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CountProductsUseCase for CountProductsUseCaseImpl {
    async fn execute(&self) -> Result<u64, ProductError> {
        let count = self.repository.count().await?;
        self.logger.debug(&format!("Product count: {}", count));
        Ok(count)
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
    async fn should_return_repository_count() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_count().returning(|| Ok(12));

        let use_case = CountProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        assert_eq!(use_case.execute().await.unwrap(), 12);
    }

    #[tokio::test]
    async fn should_propagate_storage_error_when_count_fails() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_count()
            .returning(|| Err(RepositoryError::DatabaseError));

        let use_case = CountProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        assert!(matches!(
            use_case.execute().await.unwrap_err(),
            ProductError::Repository(RepositoryError::DatabaseError)
        ));
    }
}
