//! HTTP handlers for Products API

use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use axum_helpers::{
    errors::{
        handlers::route_not_found,
        responses::{
            BadRequestIdResponse, BadRequestValidationResponse, InternalServerErrorResponse,
            NotFoundResponse,
        },
    },
    ApiJson,
};
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::debug;
use utoipa::OpenApi;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product, ProductListResponse, ProductQuery, ProductResponse};
use crate::repository::ProductStore;
use crate::service::ProductService;

/// OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    paths(list_products, create_product, get_product),
    components(
        schemas(Product, CreateProduct, ProductListResponse, ProductResponse),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestIdResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Products", description = "Product catalog endpoints")
    )
)]
pub struct ApiDoc;

/// Create the products router.
///
/// Other methods on these paths fall through to "Route not found" rather
/// than 405.
pub fn router<S: ProductStore + 'static>(service: ProductService<S>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route(
            "/",
            get(list_products)
                .post(create_product)
                .fallback(route_not_found),
        )
        .route("/{id}", get(get_product).fallback(route_not_found))
        .with_state(shared_service)
}

/// List products, optionally filtered by category and featured flag.
///
/// A query string that cannot be decoded is treated as empty, so the request
/// falls back to the defaults.
#[utoipa::path(
    get,
    path = "",
    tag = "Products",
    params(ProductQuery),
    responses(
        (status = 200, description = "One page of matching products", body = ProductListResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<S: ProductStore>(
    State(service): State<Arc<ProductService<S>>>,
    pairs: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> ProductResult<Json<ProductListResponse>> {
    let pairs = pairs.map(|Query(pairs)| pairs).unwrap_or_else(|e| {
        debug!(error = %e.body_text(), "Ignoring undecodable query string");
        Vec::new()
    });
    let page = service
        .list_products(ProductQuery::from_pairs(pairs))
        .await?;
    Ok(Json(page.into()))
}

/// Create a new product.
///
/// The body must be a JSON object; any other JSON value is rejected with 422
/// before the field checks run.
#[utoipa::path(
    post,
    path = "",
    tag = "Products",
    request_body = CreateProduct,
    responses(
        (status = 201, description = "Product created successfully", body = ProductResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 413, description = "Request body larger than 10KB"),
        (status = 415, description = "Content-Type is not application/json"),
        (status = 422, description = "JSON body is not an object"),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_product<S: ProductStore>(
    State(service): State<Arc<ProductService<S>>>,
    ApiJson(body): ApiJson<Map<String, Value>>,
) -> ProductResult<impl IntoResponse> {
    let product = service.create_product(CreateProduct::from(body)).await?;
    Ok((StatusCode::CREATED, Json(ProductResponse::from(product))))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = i64, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = ProductResponse),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product<S: ProductStore>(
    State(service): State<Arc<ProductService<S>>>,
    id: Result<Path<String>, PathRejection>,
) -> ProductResult<Json<ProductResponse>> {
    let Path(raw_id) = id.map_err(|e| ProductError::InvalidId(e.body_text()))?;
    let product = service.get_product(&raw_id).await?;
    Ok(Json(product.into()))
}
