use sqlx::FromRow;

use business::domain::product::model::Product;

/// Column list shared by every `products` query, in `ProductEntity` field order.
pub const PRODUCT_COLUMNS: &str = "id, name, price, description, stock";

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: i64,
    pub name: String,
    pub price: i64,
    pub description: String,
    pub stock: i32,
}

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        Product::from_repository(self.id, self.name, self.price, self.description, self.stock)
    }
}
