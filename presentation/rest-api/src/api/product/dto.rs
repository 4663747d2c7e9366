use poem_openapi::Object;

use business::domain::product::model::Product;
use business::domain::shared::paging::Page;

#[derive(Debug, Clone, Object)]
pub struct CreateProductRequest {
    /// Product name (cannot be empty)
    pub name: String,
    /// Price in whole currency units (>= 0)
    pub price: i64,
    /// Free-text description
    #[oai(default)]
    pub description: String,
    /// Units in stock (>= 0)
    #[oai(default)]
    pub stock: i32,
}

/// Full replacement of a product's fields. An `id` in the body is ignored;
/// the path identifier wins.
#[derive(Debug, Clone, Object)]
pub struct UpdateProductRequest {
    /// Product name (cannot be empty)
    pub name: String,
    /// Price in whole currency units (>= 0)
    pub price: i64,
    /// Free-text description
    #[oai(default)]
    pub description: String,
    /// Units in stock (>= 0)
    #[oai(default)]
    pub stock: i32,
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    pub price: i64,
    pub description: String,
    pub stock: i32,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.unwrap_or_default(),
            name: product.name,
            price: product.price,
            description: product.description,
            stock: product.stock,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ProductPageResponse {
    pub items: Vec<ProductResponse>,
    /// Zero-based page index
    pub page: u32,
    pub size: u32,
    /// Number of products across all pages
    pub total: u64,
    pub total_pages: u64,
}

impl From<Page<Product>> for ProductPageResponse {
    fn from(page: Page<Product>) -> Self {
        let total_pages = page.total_pages();
        let page = page.map(ProductResponse::from);
        Self {
            items: page.items,
            page: page.page,
            size: page.size,
            total: page.total,
            total_pages,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ProductCountResponse {
    pub count: u64,
}
