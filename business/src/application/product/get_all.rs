use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_all::{
    GetAllProductsParams, GetAllProductsUseCase, ProductList,
};

pub struct GetAllProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllProductsUseCase for GetAllProductsUseCaseImpl {
    async fn execute(&self, params: GetAllProductsParams) -> Result<ProductList, ProductError> {
        let map_err = |e: RepositoryError| match e {
            RepositoryError::InvalidSort(field) => {
                self.logger
                    .warn(&format!("Rejected sort on unknown field: {}", field));
                ProductError::InvalidSort
            }
            other => ProductError::Repository(other),
        };

        let list = match (params.page, params.sort) {
            (Some(page), sort) => {
                self.logger.info(&format!(
                    "Fetching products page {} (size {})",
                    page.page(),
                    page.size()
                ));
                ProductList::Paged(self.repository.find_page(page, sort).await.map_err(map_err)?)
            }
            (None, Some(sort)) => {
                self.logger.info(&format!(
                    "Fetching all products sorted by {} {}",
                    sort.field, sort.direction
                ));
                ProductList::All(self.repository.find_all_sorted(sort).await.map_err(map_err)?)
            }
            (None, None) => {
                self.logger.info("Fetching all products");
                ProductList::All(self.repository.find_all().await.map_err(map_err)?)
            }
        };

        if let ProductList::All(products) = &list {
            self.logger
                .info(&format!("Found {} products", products.len()));
        }
        Ok(list)
    }
}
