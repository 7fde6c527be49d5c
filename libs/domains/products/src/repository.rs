use async_trait::async_trait;

use crate::error::ProductResult;
use crate::models::Catalog;

/// Whole-collection persistence for products.
///
/// There are no partial reads or writes: every operation loads the full
/// catalog and a mutation saves it back in full. Implementations do not lock,
/// so two concurrent load-modify-save cycles can lose one of the writes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Read and decode the entire catalog
    async fn load(&self) -> ProductResult<Catalog>;

    /// Replace the stored catalog with `catalog`
    async fn save(&self, catalog: &Catalog) -> ProductResult<()>;
}
