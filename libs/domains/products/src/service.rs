//! Product Service - Business logic layer

use std::sync::Arc;
use tracing::{info, instrument};

use crate::error::{ProductError, ProductResult};
use crate::loose::parse_int;
use crate::models::{CreateProduct, Pagination, Product, ProductFilter, ProductPage, ProductQuery};
use crate::repository::ProductStore;

/// Product service providing the catalog operations
///
/// Every call starts from a fresh [`ProductStore::load`]; nothing is cached
/// between requests.
pub struct ProductService<S: ProductStore> {
    store: Arc<S>,
}

impl<S: ProductStore> ProductService<S> {
    /// Create a new ProductService with the given store
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Filter, count and paginate the catalog
    #[instrument(skip(self))]
    pub async fn list_products(&self, query: ProductQuery) -> ProductResult<ProductPage> {
        let pagination = Pagination::from_query(&query);
        let filter = ProductFilter::from_query(&query);

        let catalog = self.store.load().await?;
        let matching: Vec<Product> = catalog
            .products
            .into_iter()
            .filter(|p| filter.matches(p))
            .collect();
        let total = matching.len();

        let products = matching
            .into_iter()
            .skip(usize::try_from(pagination.offset()).unwrap_or(usize::MAX))
            .take(pagination.limit as usize)
            .collect();

        Ok(ProductPage {
            total,
            page: pagination.page,
            limit: pagination.limit,
            products,
        })
    }

    /// Get a product by its raw path id.
    ///
    /// The id is read leniently, so `"3abc"` looks up product 3.
    #[instrument(skip(self))]
    pub async fn get_product(&self, raw_id: &str) -> ProductResult<Product> {
        let id = parse_int(raw_id).ok_or_else(|| ProductError::InvalidId(raw_id.to_string()))?;

        let catalog = self.store.load().await?;
        catalog
            .find(id)
            .cloned()
            .ok_or(ProductError::NotFound(id))
    }

    /// Validate the input, append a new product and persist the catalog
    #[instrument(skip(self, input))]
    pub async fn create_product(&self, input: CreateProduct) -> ProductResult<Product> {
        let draft = input.into_draft()?;

        let mut catalog = self.store.load().await?;
        let product = Product::new(catalog.next_id()?, draft);
        catalog.products.push(product.clone());
        self.store.save(&catalog).await?;

        info!(product_id = product.id, name = %product.name, "Product created");
        Ok(product)
    }

    /// Whether the backing store can currently be read
    #[instrument(skip(self))]
    pub async fn check_store(&self) -> ProductResult<()> {
        self.store.load().await.map(|_| ())
    }
}

impl<S: ProductStore> Clone for ProductService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}
