//! Products Domain
//!
//! The product catalog: a single collection kept in a JSON file, with list,
//! fetch-by-id and create operations exposed over HTTP.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Filtering, pagination, id assignment
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │    Store    │  ← Whole-catalog load/save (trait + JSON file implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, request parsing, response bodies
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_products::{handlers, JsonFileStore, ProductService};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = JsonFileStore::new("db/db.json");
//! store.ensure_exists().await?;
//!
//! let service = ProductService::new(store);
//! let router = handlers::router(service);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod json_file;
pub mod loose;
pub mod models;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{ProductError, ProductResult};
pub use handlers::ApiDoc;
pub use json_file::JsonFileStore;
pub use models::{
    Catalog, CreateProduct, Pagination, Product, ProductFilter, ProductListResponse, ProductPage,
    ProductQuery, ProductResponse,
};
pub use repository::ProductStore;
pub use service::ProductService;
