use std::cmp::Ordering;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::paging::{Page, PageRequest, Sort};

/// A record type persisted under a store-assigned surrogate identifier.
pub trait Entity: Clone + Send + Sync + 'static {
    type Id: Copy + Ord + Send + Sync + std::fmt::Display + 'static;

    /// Fields a caller may sort by. Always includes `"id"`.
    const SORTABLE_FIELDS: &'static [&'static str];

    /// `None` until the entity has been saved once.
    fn id(&self) -> Option<Self::Id>;

    fn with_id(self, id: Self::Id) -> Self;

    /// Compares two entities on one of `SORTABLE_FIELDS`.
    /// Returns `None` for any other field.
    fn compare_by(&self, other: &Self, field: &str) -> Option<Ordering>;
}

/// Generic CRUD contract over an entity type and its identifier type.
///
/// Implementations hold their store client explicitly and keep no other
/// state, so a single instance can be shared across tasks behind an `Arc`.
#[async_trait]
pub trait CrudRepository<T, ID>: Send + Sync
where
    T: Entity<Id = ID>,
    ID: Copy + Send + Sync + 'static,
{
    /// Inserts when `entity.id()` is `None`, updates otherwise.
    ///
    /// Returns the persisted entity with its identifier populated. Updating an
    /// identifier the store does not hold fails with `RepositoryError::NotFound`.
    async fn save(&self, entity: T) -> Result<T, RepositoryError>;

    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepositoryError>;

    /// All records ordered by identifier.
    async fn find_all(&self) -> Result<Vec<T>, RepositoryError>;

    async fn find_all_sorted(&self, sort: Sort) -> Result<Vec<T>, RepositoryError>;

    /// One page of records, ordered by `sort` or by identifier when absent.
    async fn find_page(
        &self,
        page: PageRequest,
        sort: Option<Sort>,
    ) -> Result<Page<T>, RepositoryError>;

    async fn exists_by_id(&self, id: ID) -> Result<bool, RepositoryError>;

    /// Removes the record if present. Deleting a missing identifier is a no-op.
    async fn delete_by_id(&self, id: ID) -> Result<(), RepositoryError>;

    async fn count(&self) -> Result<u64, RepositoryError>;
}
