#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.name_empty")]
    NameEmpty,
    #[error("product.negative_price")]
    NegativePrice,
    #[error("product.negative_stock")]
    NegativeStock,
    #[error("product.not_found")]
    NotFound,
    #[error("product.invalid_sort")]
    InvalidSort,
    #[error(transparent)]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
