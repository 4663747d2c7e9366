use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::shared::paging::{Page, PageRequest, Sort};

#[derive(Default)]
pub struct GetAllProductsParams {
    pub sort: Option<Sort>,
    pub page: Option<PageRequest>,
}

/// A page when one was requested, every product otherwise.
#[derive(Debug)]
pub enum ProductList {
    All(Vec<Product>),
    Paged(Page<Product>),
}

#[async_trait]
pub trait GetAllProductsUseCase: Send + Sync {
    async fn execute(&self, params: GetAllProductsParams) -> Result<ProductList, ProductError>;
}
