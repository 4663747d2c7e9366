use crate::domain::repository::CrudRepository;

use super::model::Product;

/// Product data accessor: the generic CRUD contract bound to `(Product, i64)`.
///
/// Declares no queries of its own. Any adapter implementing
/// `CrudRepository<Product, i64>` is a `ProductRepository`.
pub trait ProductRepository: CrudRepository<Product, i64> {}

impl<R> ProductRepository for R where R: CrudRepository<Product, i64> {}
