use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::repository::CrudRepository;
use business::domain::shared::paging::{Page, PageRequest, Sort};

use super::entity::{PRODUCT_COLUMNS, ProductEntity};
use crate::error::map_sqlx_error;

pub struct ProductRepositoryPostgres {
    pool: PgPool,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// `ORDER BY` clause for a validated sort. Field names come from
    /// `Product::SORTABLE_FIELDS`, never from raw input.
    fn order_by(sort: &Sort) -> Result<String, RepositoryError> {
        sort.validate_for::<Product>()?;
        if sort.field == "id" {
            return Ok(format!("ORDER BY id {}", sort.direction.as_sql()));
        }
        Ok(format!(
            "ORDER BY {} {}, id ASC",
            sort.field,
            sort.direction.as_sql()
        ))
    }

    async fn insert(&self, product: &Product) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(&format!(
            "INSERT INTO products (name, price, description, stock) VALUES ($1, $2, $3, $4) RETURNING {}",
            PRODUCT_COLUMNS
        ))
        .bind(&product.name)
        .bind(product.price)
        .bind(&product.description)
        .bind(product.stock)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(entity.into_domain())
    }

    async fn update(&self, id: i64, product: &Product) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(&format!(
            "UPDATE products SET name = $2, price = $3, description = $4, stock = $5 WHERE id = $1 RETURNING {}",
            PRODUCT_COLUMNS
        ))
        .bind(id)
        .bind(&product.name)
        .bind(product.price)
        .bind(&product.description)
        .bind(product.stock)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }
}

#[async_trait]
impl CrudRepository<Product, i64> for ProductRepositoryPostgres {
    async fn save(&self, entity: Product) -> Result<Product, RepositoryError> {
        match entity.id {
            None => self.insert(&entity).await,
            Some(id) => self.update(id, &entity).await,
        }
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(&format!(
            "SELECT {} FROM products WHERE id = $1",
            PRODUCT_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(entity.map(ProductEntity::into_domain))
    }

    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError> {
        self.find_all_sorted(Sort::default()).await
    }

    async fn find_all_sorted(&self, sort: Sort) -> Result<Vec<Product>, RepositoryError> {
        let entities = sqlx::query_as::<_, ProductEntity>(&format!(
            "SELECT {} FROM products {}",
            PRODUCT_COLUMNS,
            Self::order_by(&sort)?
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn find_page(
        &self,
        page: PageRequest,
        sort: Option<Sort>,
    ) -> Result<Page<Product>, RepositoryError> {
        let order_by = Self::order_by(&sort.unwrap_or_default())?;

        // Rows and total come from one snapshot.
        let mut tx = self.pool.begin().await.map_err(map_sqlx_error)?;
        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ READ ONLY")
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx_error)?;

        let entities = sqlx::query_as::<_, ProductEntity>(&format!(
            "SELECT {} FROM products {} LIMIT $1 OFFSET $2",
            PRODUCT_COLUMNS, order_by
        ))
        .bind(i64::from(page.size()))
        .bind(page.offset() as i64)
        .fetch_all(&mut *tx)
        .await
        .map_err(map_sqlx_error)?;

        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM products")
            .fetch_one(&mut *tx)
            .await
            .map_err(map_sqlx_error)?;

        tx.commit().await.map_err(map_sqlx_error)?;

        let items = entities.into_iter().map(|e| e.into_domain()).collect();

        Ok(Page::new(items, page, total.max(0) as u64))
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, RepositoryError> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM products WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            tracing::debug!(id, "Delete of missing product ignored");
        }

        Ok(())
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(count.max(0) as u64)
    }
}
