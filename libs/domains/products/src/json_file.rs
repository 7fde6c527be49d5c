//! Catalog persisted as a single pretty-printed JSON file.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::{debug, info, instrument};

use crate::error::{ProductError, ProductResult};
use crate::models::Catalog;
use crate::repository::ProductStore;

/// File-backed [`ProductStore`].
///
/// The file holds `{ "products": [...] }`. It is read on every `load` and
/// rewritten in place on every `save`; the write is neither atomic nor locked.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates the file, and its parent directories, holding an empty
    /// catalog when nothing exists at the path yet. Returns whether a file
    /// was created. An existing file is never touched.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub async fn ensure_exists(&self) -> ProductResult<bool> {
        if fs::try_exists(&self.path)
            .await
            .map_err(|e| self.storage_error("inspect", e))?
        {
            debug!("Catalog file already present");
            return Ok(false);
        }

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| self.storage_error("create directory for", e))?;
        }

        self.save(&Catalog::default()).await?;
        info!("Created empty catalog file");
        Ok(true)
    }

    fn storage_error(&self, action: &str, err: impl std::fmt::Display) -> ProductError {
        ProductError::Storage(format!(
            "Failed to {} {}: {}",
            action,
            self.path.display(),
            err
        ))
    }
}

#[async_trait]
impl ProductStore for JsonFileStore {
    async fn load(&self) -> ProductResult<Catalog> {
        let data = fs::read_to_string(&self.path)
            .await
            .map_err(|e| self.storage_error("read", e))?;

        let catalog: Catalog =
            serde_json::from_str(&data).map_err(|e| self.storage_error("decode", e))?;

        debug!(
            path = %self.path.display(),
            products = catalog.products.len(),
            "Loaded catalog"
        );
        Ok(catalog)
    }

    async fn save(&self, catalog: &Catalog) -> ProductResult<()> {
        let json = serde_json::to_string_pretty(catalog)
            .map_err(|e| self.storage_error("encode", e))?;

        fs::write(&self.path, json)
            .await
            .map_err(|e| self.storage_error("write", e))?;

        debug!(
            path = %self.path.display(),
            products = catalog.products.len(),
            "Saved catalog"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Product, ProductDraft};
    use tempfile::tempdir;

    fn product(id: u64) -> Product {
        Product::new(
            id,
            ProductDraft {
                name: format!("Product {id}"),
                description: "desc".to_string(),
                image: "/img.png".to_string(),
                price: 9.5,
                category: "Books".to_string(),
                rating: 0.0,
                stock: 3,
                featured: false,
            },
        )
    }

    #[tokio::test]
    async fn test_save_then_load_returns_same_catalog() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("db.json"));
        let catalog = Catalog::new(vec![product(1), product(2)]);

        store.save(&catalog).await.unwrap();
        let loaded = store.load().await.unwrap();

        assert_eq!(loaded, catalog);
    }

    #[tokio::test]
    async fn test_save_writes_two_space_indented_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("db.json");
        let store = JsonFileStore::new(&path);

        store.save(&Catalog::new(vec![product(1)])).await.unwrap();
        let raw = std::fs::read_to_string(&path).unwrap();

        assert!(raw.starts_with("{\n  \"products\": [\n    {"));
    }

    #[tokio::test]
    async fn test_save_replaces_previous_contents() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("db.json"));

        store
            .save(&Catalog::new(vec![product(1), product(2), product(3)]))
            .await
            .unwrap();
        store.save(&Catalog::new(vec![product(7)])).await.unwrap();

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded.products.len(), 1);
        assert_eq!(loaded.products[0].id, 7);
    }

    #[tokio::test]
    async fn test_load_missing_file_is_storage_error() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("absent.json"));

        let err = store.load().await.unwrap_err();
        assert!(matches!(err, ProductError::Storage(ref msg) if msg.contains("absent.json")));
    }

    #[tokio::test]
    async fn test_load_invalid_json_is_storage_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("db.json");
        std::fs::write(&path, "{ invalid json }").unwrap();

        let err = JsonFileStore::new(&path).load().await.unwrap_err();
        assert!(matches!(err, ProductError::Storage(ref msg) if msg.starts_with("Failed to decode")));
    }

    #[tokio::test]
    async fn test_load_wrong_shape_is_storage_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("db.json");
        std::fs::write(&path, r#"{ "products": { "id": 1 } }"#).unwrap();

        let err = JsonFileStore::new(&path).load().await.unwrap_err();
        assert!(matches!(err, ProductError::Storage(_)));
    }

    #[tokio::test]
    async fn test_save_into_missing_directory_is_storage_error() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("nope").join("db.json"));

        let err = store.save(&Catalog::default()).await.unwrap_err();
        assert!(matches!(err, ProductError::Storage(ref msg) if msg.starts_with("Failed to write")));
    }

    #[tokio::test]
    async fn test_ensure_exists_creates_empty_catalog_once() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("data").join("db.json"));

        assert!(store.ensure_exists().await.unwrap());
        assert_eq!(store.load().await.unwrap(), Catalog::default());

        store.save(&Catalog::new(vec![product(1)])).await.unwrap();
        assert!(!store.ensure_exists().await.unwrap());
        assert_eq!(store.load().await.unwrap().products.len(), 1);
    }
}
