//! In-process fruit store

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{FruitStore, StoreResult};
use crate::fruits::{Fruit, FruitId, NewFruit};

/// Fruit documents held in memory, kept in insertion order
pub struct MemoryStore {
    name: String,
    fruits: RwLock<Vec<Fruit>>,
}

impl MemoryStore {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fruits: RwLock::new(Vec::new()),
        }
    }
}

#[async_trait]
impl FruitStore for MemoryStore {
    fn name(&self) -> &str {
        &self.name
    }

    async fn insert(&self, doc: NewFruit) -> StoreResult<FruitId> {
        let fruit = doc.with_id(FruitId::new());
        let id = fruit.id;
        self.fruits.write().await.push(fruit);
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
        let mut fruits = self.fruits.write().await;
        if let Some(fruit) = fruits.iter_mut().find(|f| f.id == id) {
            fruit.overwrite(doc);
        }
        Ok(())
    }

    async fn delete_by_id(&self, id: &str) -> StoreResult<()> {
        let id = FruitId::parse(id)?;
        self.fruits.write().await.retain(|f| f.id != id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StoreError;

    fn apple() -> NewFruit {
        NewFruit::new("Apple", "red", true)
    }

    #[tokio::test]
    async fn test_insert_then_find() {
        let store = MemoryStore::new("test");
        let id = store.insert(apple()).await.unwrap();

        let found = store.find_by_id(&id.to_string()).await.unwrap().unwrap();
        assert_eq!(found, apple().with_id(id));
    }

    #[tokio::test]
    async fn test_find_all_keeps_insertion_order() {
        let store = MemoryStore::new("test");
        for name in ["Cherry", "Apple", "Banana"] {
            store.insert(NewFruit::new(name, "any", false)).await.unwrap();
        }

        let names: Vec<_> = store
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|f| f.name)
            .collect();
        assert_eq!(names, ["Cherry", "Apple", "Banana"]);
    }

    #[tokio::test]
    async fn test_find_unknown_id_is_none() {
        let store = MemoryStore::new("test");
        store.insert(apple()).await.unwrap();

        let missing = store.find_by_id(&FruitId::new().to_string()).await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_malformed_id_is_invalid() {
        let store = MemoryStore::new("test");
        let err = store.find_by_id("42").await.unwrap_err();
        assert!(matches!(err, StoreError::InvalidId(_)));

        let err = store.delete_by_id("42").await.unwrap_err();
        assert!(matches!(err, StoreError::InvalidId(_)));
    }

    #[tokio::test]
    async fn test_update_overwrites_document() {
        let store = MemoryStore::new("test");
        let id = store.insert(apple()).await.unwrap();

        store
            .update_by_id(&id.to_string(), NewFruit::new("Apple", "green", false))
            .await
            .unwrap();

        let found = store.find_by_id(&id.to_string()).await.unwrap().unwrap();
        assert_eq!(found.color, "green");
        assert!(!found.is_ready_to_eat);
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_noop() {
        let store = MemoryStore::new("test");
        let id = store.insert(apple()).await.unwrap();

        store
            .update_by_id(&FruitId::new().to_string(), NewFruit::default())
            .await
            .unwrap();

        let all = store.find_all().await.unwrap();
        assert_eq!(all, vec![apple().with_id(id)]);
    }

    #[tokio::test]
    async fn test_delete_removes_only_target() {
        let store = MemoryStore::new("test");
        let keep = store.insert(apple()).await.unwrap();
        let gone = store.insert(NewFruit::new("Plum", "purple", false)).await.unwrap();

        store.delete_by_id(&gone.to_string()).await.unwrap();
        store.delete_by_id(&gone.to_string()).await.unwrap();

        assert!(store.find_by_id(&gone.to_string()).await.unwrap().is_none());
        assert_eq!(store.find_all().await.unwrap().len(), 1);
        assert!(store.find_by_id(&keep.to_string()).await.unwrap().is_some());
    }
}
