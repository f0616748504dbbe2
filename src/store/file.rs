//! JSON document file store
//!
//! The whole collection is loaded at open and served from memory. Every
//! write rewrites the file: the new collection goes to `<path>.tmp`, is
//! fsynced, then renamed over `<path>`. The in-memory copy only changes
//! once the rename succeeded, so a failed write leaves both untouched.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::RwLock;

use super::{FruitStore, StoreError, StoreResult, DEFAULT_DATABASE_NAME};
use crate::fruits::{Fruit, FruitId, NewFruit};

/// Fruit documents persisted as a JSON array in a single file
pub struct FileStore {
    name: String,
    path: PathBuf,
    fruits: RwLock<Vec<Fruit>>,
}

impl FileStore {
    /// Open the store at `path`, creating parent directories as needed
    ///
    /// A missing or empty file is an empty store. Anything else must parse
    /// as a list of fruit documents.
    pub async fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await.map_err(|source| StoreError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let fruits = match fs::read(&path).await {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => Vec::new(),
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|source| StoreError::Corrupt {
                path: path.clone(),
                source,
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(source) => return Err(StoreError::Io { path, source }),
        };

        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(DEFAULT_DATABASE_NAME)
            .to_string();

        Ok(Self {
            name,
            path,
            fruits: RwLock::new(fruits),
        })
    }

    #[cfg(test)]
    fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut tmp = OsString::from(self.path.as_os_str());
        tmp.push(".tmp");
        PathBuf::from(tmp)
    }

    async fn persist(&self, fruits: &[Fruit]) -> StoreResult<()> {
        let json = serde_json::to_vec_pretty(fruits).map_err(|source| StoreError::Corrupt {
            path: self.path.clone(),
            source,
        })?;

        let tmp = self.temp_path();
        let io_err = |source: std::io::Error| StoreError::Io {
            path: tmp.clone(),
            source,
        };

        let mut file = fs::File::create(&tmp).await.map_err(io_err)?;
        file.write_all(&json).await.map_err(io_err)?;
        file.sync_all().await.map_err(io_err)?;
        drop(file);

        fs::rename(&tmp, &self.path)
            .await
            .map_err(|source| StoreError::Io {
                path: self.path.clone(),
                source,
            })
    }

    /// Apply `change` to a copy of the collection, persist it, then commit
    ///
    /// The write lock is held across the file write, so writers never
    /// interleave.
    async fn write_with<F>(&self, change: F) -> StoreResult<()>
    where
        F: FnOnce(&mut Vec<Fruit>),
    {
        let mut fruits = self.fruits.write().await;
        let mut next = fruits.clone();
        change(&mut next);
        self.persist(&next).await?;
        *fruits = next;
        Ok(())
    }
}

#[async_trait]
impl FruitStore for FileStore {
    fn name(&self) -> &str {
        &self.name
    }

    async fn insert(&self, doc: NewFruit) -> StoreResult<FruitId> {
        let fruit = doc.with_id(FruitId::new());
        let id = fruit.id;
        self.write_with(|fruits| fruits.push(fruit)).await?;
        Ok(id)
    }

    async fn find_all(&self) -> StoreResult<Vec<Fruit>> {
        Ok(self.fruits.read().await.clone())
    }

    async fn find_by_id(&self, id: &str) -> StoreResult<Option<Fruit>> {
        let id = FruitId::parse(id)?;
        let fruits = self.fruits.read().await;
        Ok(fruits.iter().find(|f| f.id == id).cloned())
    }

    async fn update_by_id(&self, id: &str, doc: NewFruit) -> StoreResult<()> {
        let id = FruitId::parse(id)?;
        if !self.fruits.read().await.iter().any(|f| f.id == id) {
            return Ok(());
        }
        self.write_with(|fruits| {
            if let Some(fruit) = fruits.iter_mut().find(|f| f.id == id) {
                fruit.overwrite(doc);
            }
        })
        .await
    }

    async fn delete_by_id(&self, id: &str) -> StoreResult<()> {
        let id = FruitId::parse(id)?;
        if !self.fruits.read().await.iter().any(|f| f.id == id) {
            return Ok(());
        }
        self.write_with(|fruits| fruits.retain(|f| f.id != id)).await
    }
}
