//! # Record Store
//!
//! Persistence for fruit documents, addressed by opaque id.
//!
//! The store is chosen once at startup from a connection URI:
//!
//! - `memory://<name>` - in-process, lost on exit
//! - `file://<path>` - JSON document file, rewritten after every write
//!
//! Handlers only see `Arc<dyn FruitStore>`.

mod file;
mod memory;

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::fruits::{Fruit, FruitId, NewFruit};

pub use file::FileStore;
pub use memory::MemoryStore;

/// Database name used when a `memory://` URI names none
pub const DEFAULT_DATABASE_NAME: &str = "fruits";

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Store errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// Id text is not a valid fruit id
    #[error("Invalid fruit id: {0}")]
    InvalidId(String),

    /// Connection URI names no known store
    #[error("Unsupported database URI: {0}")]
    UnsupportedUri(String),

    /// Backing file could not be read or written
    #[error("Store I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Backing file exists but is not a list of fruit documents
    #[error("Corrupt store file {}: {source}", .path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Fruit document store
///
/// Update and delete on an id that is well formed but unknown are no-ops.
/// A malformed id fails with [`StoreError::InvalidId`] on every operation.
#[async_trait]
pub trait FruitStore: Send + Sync {
    /// Database name, reported at connect and by `/health`
    fn name(&self) -> &str;

    /// Insert a new document and return its assigned id
    async fn insert(&self, doc: NewFruit) -> StoreResult<FruitId>;

    /// Every document in natural (insertion) order
    async fn find_all(&self) -> StoreResult<Vec<Fruit>>;

    async fn find_by_id(&self, id: &str) -> StoreResult<Option<Fruit>>;

    /// Overwrite the whole document at `id`
    async fn update_by_id(&self, id: &str, doc: NewFruit) -> StoreResult<()>;

    async fn delete_by_id(&self, id: &str) -> StoreResult<()>;
}

/// Open the store named by a connection URI
pub async fn connect(uri: &str) -> StoreResult<Arc<dyn FruitStore>> {
    if let Some(name) = uri.strip_prefix("memory://") {
        let name = if name.is_empty() {
            DEFAULT_DATABASE_NAME
        } else {
            name
        };
        return Ok(Arc::new(MemoryStore::new(name)));
    }

    if let Some(path) = uri.strip_prefix("file://") {
        if path.is_empty() {
            return Err(StoreError::UnsupportedUri(uri.to_string()));
        }
        let store = FileStore::open(path).await?;
        return Ok(Arc::new(store));
    }

    Err(StoreError::UnsupportedUri(uri.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_connect_memory() {
        let store = connect("memory://orchard").await.unwrap();
        assert_eq!(store.name(), "orchard");
        assert!(store.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_connect_memory_default_name() {
        let store = connect("memory://").await.unwrap();
        assert_eq!(store.name(), DEFAULT_DATABASE_NAME);
    }

    #[tokio::test]
    async fn test_connect_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("fruits.json");
        let uri = format!("file://{}", path.display());

        let store = connect(&uri).await.unwrap();
        assert_eq!(store.name(), "fruits");
    }

    #[tokio::test]
    async fn test_connect_rejects_unknown_scheme() {
        let err = connect("mongodb://localhost:27017/fruits").await.err().unwrap();
        assert!(matches!(err, StoreError::UnsupportedUri(_)));
    }

    #[tokio::test]
    async fn test_connect_rejects_empty_file_path() {
        let err = connect("file://").await.err().unwrap();
        assert!(matches!(err, StoreError::UnsupportedUri(_)));
    }
}
