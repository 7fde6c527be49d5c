use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::{IntoParams, ToSchema};
use validator::ValidateLength;

use crate::error::{ProductError, ProductResult};
use crate::loose::{float_from_value, int_from_value, is_truthy};

pub const REQUIRED_FIELDS: &str = "name, description, price, image, and category are required";
pub const INVALID_PRICE: &str = "price must be a valid positive number";
pub const INVALID_NAME: &str = "name must be a non-empty string (max 255 chars)";
pub const NON_STRING_FIELDS: &str = "description, image, and category must be strings";

pub const MAX_NAME_LENGTH: u64 = 255;

/// Product entity, stored as one element of the catalog file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Sequential identifier, assigned on creation
    pub id: u64,
    pub name: String,
    pub description: String,
    /// Image URL or path
    pub image: String,
    pub price: f64,
    /// Free-form category, matched case-insensitively when filtering
    pub category: String,
    /// Older records may carry `null`
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub stock: u64,
    #[serde(default)]
    pub featured: bool,
}

/// The whole persisted collection.
///
/// Top-level keys other than `products` are kept as-is so a rewrite does not
/// drop them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub products: Vec<Product>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products,
            extra: Map::new(),
        }
    }

    /// `max(id) + 1`, or 1 for an empty catalog.
    pub fn next_id(&self) -> ProductResult<u64> {
        match self.products.iter().map(|p| p.id).max() {
            None => Ok(1),
            Some(max) => max
                .checked_add(1)
                .ok_or_else(|| ProductError::Storage(format!("No product id left after {max}"))),
        }
    }

    /// First product with the given id. Ids outside the stored range simply
    /// match nothing.
    pub fn find(&self, id: i64) -> Option<&Product> {
        let id = u64::try_from(id).ok()?;
        self.products.iter().find(|p| p.id == id)
    }
}

/// Request body for creating a product.
///
/// Every field is kept as raw JSON: prices and stock arrive as numbers or
/// strings, and presence is decided by truthiness rather than by type. Use
/// [`CreateProduct::into_draft`] to run the checks and obtain typed values.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateProduct {
    #[serde(default)]
    #[schema(value_type = String, example = "Wireless Mouse")]
    pub name: Value,
    #[serde(default)]
    #[schema(value_type = String, example = "2.4GHz, 12 month battery")]
    pub description: Value,
    /// Number or numeric string, must not be negative
    #[serde(default)]
    #[schema(value_type = f64, example = 24.99)]
    pub price: Value,
    #[serde(default)]
    #[schema(value_type = String, example = "Electronics")]
    pub category: Value,
    #[serde(default)]
    #[schema(value_type = String, example = "/images/mouse.png")]
    pub image: Value,
    /// Defaults to 0 when absent or not an integer
    #[serde(default)]
    #[schema(value_type = Option<i64>, example = 40)]
    pub stock: Value,
    /// Only `true` or `"true"` mark a product as featured
    #[serde(default)]
    #[schema(value_type = Option<bool>)]
    pub featured: Value,
    #[serde(default)]
    #[schema(value_type = Option<f64>, example = 4.5)]
    pub rating: Value,
}

impl From<Map<String, Value>> for CreateProduct {
    /// Picks the known fields out of a JSON object; absent ones are `null`.
    fn from(mut body: Map<String, Value>) -> Self {
        let mut take = |key: &str| body.remove(key).unwrap_or_default();
        Self {
            name: take("name"),
            description: take("description"),
            price: take("price"),
            category: take("category"),
            image: take("image"),
            stock: take("stock"),
            featured: take("featured"),
            rating: take("rating"),
        }
    }
}

/// Checked and normalized product fields, everything but the id.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub image: String,
    pub price: f64,
    pub category: String,
    pub rating: f64,
    pub stock: u64,
    pub featured: bool,
}

impl CreateProduct {
    /// Runs the create checks in order, stopping at the first failure:
    ///
    /// 1. name, price, category, description and image are all provided
    /// 2. price reads as a finite, non-negative number
    /// 3. name is a string of at most 255 characters, non-empty once trimmed
    /// 4. description, image and category are strings
    ///
    /// Strings are trimmed, stock is clamped at 0, and rating falls back to
    /// 0 unless a truthy numeric value was sent.
    pub fn into_draft(self) -> ProductResult<ProductDraft> {
        let required = [
            &self.name,
            &self.price,
            &self.category,
            &self.description,
            &self.image,
        ];
        if !required.into_iter().all(is_truthy) {
            return Err(ProductError::Validation(REQUIRED_FIELDS.to_string()));
        }

        let price = float_from_value(&self.price)
            .filter(|p| p.is_finite() && *p >= 0.0)
            .ok_or_else(|| ProductError::Validation(INVALID_PRICE.to_string()))?;

        // The length limit applies to the name as sent, padding included.
        let name = match &self.name {
            Value::String(raw) if raw.validate_length(None, Some(MAX_NAME_LENGTH), None) => {
                raw.trim().to_string()
            }
            _ => return Err(ProductError::Validation(INVALID_NAME.to_string())),
        };
        if name.is_empty() {
            return Err(ProductError::Validation(INVALID_NAME.to_string()));
        }

        let (description, image, category) = match (&self.description, &self.image, &self.category)
        {
            (Value::String(d), Value::String(i), Value::String(c)) => {
                (d.trim().to_string(), i.trim().to_string(), c.trim().to_string())
            }
            _ => return Err(ProductError::Validation(NON_STRING_FIELDS.to_string())),
        };

        let rating = if is_truthy(&self.rating) {
            float_from_value(&self.rating)
                .filter(|r| r.is_finite())
                .unwrap_or(0.0)
        } else {
            0.0
        };

        let stock = int_from_value(&self.stock).unwrap_or(0).max(0) as u64;

        let featured = matches!(&self.featured, Value::Bool(true))
            || matches!(&self.featured, Value::String(s) if s == "true");

        Ok(ProductDraft {
            name,
            description,
            image,
            price,
            category,
            rating,
            stock,
            featured,
        })
    }
}

impl Product {
    /// Create a new product from a checked draft
    pub fn new(id: u64, draft: ProductDraft) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
            image: draft.image,
            price: draft.price,
            category: draft.category,
            rating: Some(draft.rating),
            stock: draft.stock,
            featured: draft.featured,
        }
    }
}

/// Raw query parameters for listing products.
///
/// Kept as strings so malformed numbers fall back to defaults instead of
/// rejecting the request.
#[derive(Debug, Clone, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProductQuery {
    /// Case-insensitive exact category match; empty means no filter
    pub category: Option<String>,
    /// `"true"` keeps featured products, any other value keeps the rest
    pub featured: Option<String>,
    /// 1-based page number (default 1)
    pub page: Option<String>,
    /// Page size, 1 to 100 (default 10)
    pub limit: Option<String>,
}

impl ProductQuery {
    /// Builds the query from decoded `key=value` pairs. When a key repeats,
    /// the first value wins; unknown keys are ignored.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "category" => &mut query.category,
                "featured" => &mut query.featured,
                "page" => &mut query.page,
                "limit" => &mut query.limit,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        query
    }
}

/// Filters applied before pagination
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    /// Lowercased category
    pub category: Option<String>,
    pub featured: Option<bool>,
}

impl ProductFilter {
    pub fn from_query(query: &ProductQuery) -> Self {
        Self {
            category: query
                .category
                .as_deref()
                .filter(|c| !c.is_empty())
                .map(str::to_lowercase),
            featured: query.featured.as_deref().map(|f| f == "true"),
        }
    }

    pub fn matches(&self, product: &Product) -> bool {
        let category_ok = self
            .category
            .as_deref()
            .is_none_or(|c| product.category.to_lowercase() == c);
        let featured_ok = self.featured.is_none_or(|f| product.featured == f);
        category_ok && featured_ok
    }
}

/// Normalized page window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u64,
    pub limit: u64,
}

impl Pagination {
    pub const DEFAULT_PAGE: u64 = 1;
    pub const DEFAULT_LIMIT: u64 = 10;
    pub const MAX_LIMIT: u64 = 100;

    /// Reads `page` and `limit` leniently. Missing, non-numeric, or zero
    /// values take the defaults; then `page >= 1` and `1 <= limit <= 100`.
    pub fn from_raw(page: Option<&str>, limit: Option<&str>) -> Self {
        let read = |raw: Option<&str>, default: u64| {
            raw.and_then(crate::loose::parse_int)
                .filter(|n| *n != 0)
                .unwrap_or(default as i64)
        };

        let page = read(page, Self::DEFAULT_PAGE).max(1) as u64;
        let limit = read(limit, Self::DEFAULT_LIMIT).clamp(1, Self::MAX_LIMIT as i64) as u64;

        Self { page, limit }
    }

    pub fn from_query(query: &ProductQuery) -> Self {
        Self::from_raw(query.page.as_deref(), query.limit.as_deref())
    }

    /// Index of the first item on this page
    pub fn offset(&self) -> u64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: Self::DEFAULT_PAGE,
            limit: Self::DEFAULT_LIMIT,
        }
    }
}

/// One page of filtered products
#[derive(Debug, Clone, PartialEq)]
pub struct ProductPage {
    /// Matches before pagination
    pub total: usize,
    pub page: u64,
    pub limit: u64,
    pub products: Vec<Product>,
}

/// Response body for `GET /api/products`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductListResponse {
    pub success: bool,
    pub total: usize,
    pub page: u64,
    pub limit: u64,
    pub products: Vec<Product>,
}

impl From<ProductPage> for ProductListResponse {
    fn from(page: ProductPage) -> Self {
        Self {
            success: true,
            total: page.total,
            page: page.page,
            limit: page.limit,
            products: page.products,
        }
    }
}

/// Response body for a single product
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductResponse {
    pub success: bool,
    pub product: Product,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            success: true,
            product,
        }
    }
}
