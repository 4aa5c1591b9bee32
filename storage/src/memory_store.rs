use async_trait::async_trait;
use cart::ports::KeyValueStore;
use dashmap::DashMap;
use shared::Result;

/// In-memory key-value storage for tests and ephemeral carts.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: DashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).map(|entry| entry.value().clone()))
    }

    async fn set(&self, key: &str, value: String) -> Result<()> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_store_set_and_get() {
        let store = MemoryStore::new();

        store.set("greeting", "hello".to_string()).await.unwrap();

        assert_eq!(
            store.get("greeting").await.unwrap(),
            Some("hello".to_string())
        );
        assert_eq!(store.get("missing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_memory_store_overwrite() {
        let store = MemoryStore::new();

        store.set("key", "one".to_string()).await.unwrap();
        store.set("key", "two".to_string()).await.unwrap();

        assert_eq!(store.get("key").await.unwrap(), Some("two".to_string()));
    }
}
