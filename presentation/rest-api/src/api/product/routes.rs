use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};

use business::domain::product::use_cases::count::CountProductsUseCase;
use business::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::product::use_cases::get_all::{
    GetAllProductsParams, GetAllProductsUseCase, ProductList,
};
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};
use business::domain::shared::paging::{DEFAULT_PAGE_SIZE, Page, PageRequest, Sort};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::{
    CreateProductRequest, ProductCountResponse, ProductPageResponse, ProductResponse,
    UpdateProductRequest,
};
use crate::api::tags::ApiTags;

pub struct ProductApi {
    create_use_case: Arc<dyn CreateProductUseCase>,
    get_all_use_case: Arc<dyn GetAllProductsUseCase>,
    get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    update_use_case: Arc<dyn UpdateProductUseCase>,
    delete_use_case: Arc<dyn DeleteProductUseCase>,
    count_use_case: Arc<dyn CountProductsUseCase>,
}

impl ProductApi {
    pub fn new(
        create_use_case: Arc<dyn CreateProductUseCase>,
        get_all_use_case: Arc<dyn GetAllProductsUseCase>,
        get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
        update_use_case: Arc<dyn UpdateProductUseCase>,
        delete_use_case: Arc<dyn DeleteProductUseCase>,
        count_use_case: Arc<dyn CountProductsUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
            count_use_case,
        }
    }
}

fn parse_id(raw: &str) -> Result<i64, Json<ErrorResponse>> {
    raw.parse::<i64>()
        .map_err(|_| ErrorResponse::validation("product.invalid_id"))
}

fn parse_sort(raw: Option<String>) -> Result<Option<Sort>, Json<ErrorResponse>> {
    raw.map(|s| s.parse::<Sort>())
        .transpose()
        .map_err(|_| ErrorResponse::validation("product.invalid_sort"))
}

/// Product catalog API
///
/// Endpoints for creating, reading, updating, deleting and counting products.
#[OpenApi]
impl ProductApi {
    /// Create a new product
    ///
    /// The store assigns the identifier; any `id` in the body is ignored.
    #[oai(path = "/api/products", method = "post", tag = "ApiTags::Products")]
    async fn create_product(&self, body: Json<CreateProductRequest>) -> CreateProductResponse {
        let params = CreateProductParams {
            name: body.0.name,
            price: body.0.price,
            description: body.0.description,
            stock: body.0.stock,
        };

        match self.create_use_case.execute(params).await {
            Ok(product) => CreateProductResponse::Created(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateProductResponse::BadRequest(json),
                    _ => CreateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// List all products
    ///
    /// Ordered by id unless `sort` is given as `field` or `field,asc|desc`
    /// (fields: id, name, price, stock).
    #[oai(path = "/api/products", method = "get", tag = "ApiTags::Products")]
    async fn get_all_products(&self, sort: Query<Option<String>>) -> GetAllProductsResponse {
        let sort = match parse_sort(sort.0) {
            Ok(sort) => sort,
            Err(json) => return GetAllProductsResponse::BadRequest(json),
        };

        match self
            .get_all_use_case
            .execute(GetAllProductsParams { sort, page: None })
            .await
        {
            Ok(list) => {
                let products = match list {
                    ProductList::All(products) => products,
                    ProductList::Paged(page) => page.items,
                };
                GetAllProductsResponse::Ok(Json(products.into_iter().map(|p| p.into()).collect()))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => GetAllProductsResponse::BadRequest(json),
                    _ => GetAllProductsResponse::InternalError(json),
                }
            }
        }
    }

    /// List one page of products
    ///
    /// `page` is zero-based; `size` is clamped to 1..=100 (default 20).
    #[oai(path = "/api/products/page", method = "get", tag = "ApiTags::Products")]
    async fn get_product_page(
        &self,
        page: Query<Option<u32>>,
        size: Query<Option<u32>>,
        sort: Query<Option<String>>,
    ) -> GetProductPageResponse {
        let sort = match parse_sort(sort.0) {
            Ok(sort) => sort,
            Err(json) => return GetProductPageResponse::BadRequest(json),
        };
        let request = PageRequest::new(page.0.unwrap_or(0), size.0.unwrap_or(DEFAULT_PAGE_SIZE));

        match self
            .get_all_use_case
            .execute(GetAllProductsParams {
                sort,
                page: Some(request),
            })
            .await
        {
            Ok(ProductList::Paged(page)) => GetProductPageResponse::Ok(Json(page.into())),
            Ok(ProductList::All(products)) => {
                let total = products.len() as u64;
                let page = Page::new(products, request, total);
                GetProductPageResponse::Ok(Json(page.into()))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => GetProductPageResponse::BadRequest(json),
                    _ => GetProductPageResponse::InternalError(json),
                }
            }
        }
    }

    /// Count products
    #[oai(path = "/api/products/count", method = "get", tag = "ApiTags::Products")]
    async fn count_products(&self) -> CountProductsResponse {
        match self.count_use_case.execute().await {
            Ok(count) => CountProductsResponse::Ok(Json(ProductCountResponse { count })),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                CountProductsResponse::InternalError(json)
            }
        }
    }

    /// Get a product by ID
    #[oai(path = "/api/products/:id", method = "get", tag = "ApiTags::Products")]
    async fn get_product_by_id(&self, id: Path<String>) -> GetProductByIdResponse {
        let id = match parse_id(&id.0) {
            Ok(id) => id,
            Err(json) => return GetProductByIdResponse::BadRequest(json),
        };

        match self
            .get_by_id_use_case
            .execute(GetProductByIdParams { id })
            .await
        {
            Ok(product) => GetProductByIdResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetProductByIdResponse::NotFound(json),
                    _ => GetProductByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// Update a product
    ///
    /// Replaces every field of an existing product.
    #[oai(path = "/api/products/:id", method = "put", tag = "ApiTags::Products")]
    async fn update_product(
        &self,
        id: Path<String>,
        body: Json<UpdateProductRequest>,
    ) -> UpdateProductResponse {
        let id = match parse_id(&id.0) {
            Ok(id) => id,
            Err(json) => return UpdateProductResponse::BadRequest(json),
        };

        let params = UpdateProductParams {
            id,
            name: body.0.name,
            price: body.0.price,
            description: body.0.description,
            stock: body.0.stock,
        };

        match self.update_use_case.execute(params).await {
            Ok(product) => UpdateProductResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateProductResponse::BadRequest(json),
                    404 => UpdateProductResponse::NotFound(json),
                    _ => UpdateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a product
    ///
    /// Answers 404 when no product has this id.
    #[oai(path = "/api/products/:id", method = "delete", tag = "ApiTags::Products")]
    async fn delete_product(&self, id: Path<String>) -> DeleteProductResponse {
        let id = match parse_id(&id.0) {
            Ok(id) => id,
            Err(json) => return DeleteProductResponse::BadRequest(json),
        };

        match self
            .delete_use_case
            .execute(DeleteProductParams { id })
            .await
        {
            Ok(()) => DeleteProductResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteProductResponse::NotFound(json),
                    _ => DeleteProductResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateProductResponse {
    #[oai(status = 201)]
    Created(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllProductsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductPageResponse {
    #[oai(status = 200)]
    Ok(Json<ProductPageResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CountProductsResponse {
    #[oai(status = 200)]
    Ok(Json<ProductCountResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductByIdResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteProductResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
