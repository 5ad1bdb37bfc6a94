use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde_json::Value;

use crate::models::{Product, QueryOptions};

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("failed to read catalog {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse catalog {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Read-only view over the JSON product file. Nothing is cached: every call
/// re-reads and re-parses the document.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    path: Arc<PathBuf>,
}

impl CatalogStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Arc::new(path.into()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn list(&self, options: &QueryOptions) -> Result<Vec<Product>, StorageError> {
        let products = self.load().await?;
        Ok(select(products, options))
    }

    /// First product whose id equals `id` exactly, or `None`.
    pub async fn get(&self, id: &Value) -> Result<Option<Product>, StorageError> {
        let products = self.load().await?;
        Ok(products.into_iter().find(|p| p.id() == Some(id)))
    }

    async fn load(&self) -> Result<Vec<Product>, StorageError> {
        let bytes = tokio::fs::read(&*self.path)
            .await
            .map_err(|source| StorageError::Read {
                path: self.path.to_path_buf(),
                source,
            })?;

        serde_json::from_slice(&bytes).map_err(|source| StorageError::Parse {
            path: self.path.to_path_buf(),
            source,
        })
    }
}

/// Tag filter, then offset/limit over the filtered sequence. Order is kept.
pub fn select(products: Vec<Product>, options: &QueryOptions) -> Vec<Product> {
    products
        .into_iter()
        .filter(|p| options.tag.as_deref().map_or(true, |tag| p.has_tag(tag)))
        .skip(options.offset)
        .take(options.limit)
        .collect()
}
