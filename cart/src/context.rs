use crate::store::CartStore;
use shared::{Error, Result};
use std::sync::Arc;

/// Handle the application root hands to cart consumers at construction
/// time. A consumer built before the root wires the store holds a detached
/// context, and any cart access through it fails with
/// [`Error::OutsideProvider`].
#[derive(Clone, Default)]
pub struct CartContext {
    store: Option<Arc<CartStore>>,
}

impl CartContext {
    /// Context backed by an initialized store.
    pub fn provide(store: Arc<CartStore>) -> Self {
        Self { store: Some(store) }
    }

    /// Context with no store attached yet.
    pub fn detached() -> Self {
        Self::default()
    }

    pub fn cart(&self) -> Result<&Arc<CartStore>> {
        self.store.as_ref().ok_or(Error::OutsideProvider)
    }
}

impl std::fmt::Debug for CartContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartContext")
            .field("attached", &self.store.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Product;
    use crate::ports::KeyValueStore;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use tokio::sync::Mutex;

    #[derive(Default)]
    struct FakeStorage {
        entries: Mutex<HashMap<String, String>>,
    }

    #[async_trait]
    impl KeyValueStore for FakeStorage {
        async fn get(&self, key: &str) -> Result<Option<String>> {
            Ok(self.entries.lock().await.get(key).cloned())
        }

        async fn set(&self, key: &str, value: String) -> Result<()> {
            self.entries.lock().await.insert(key.to_string(), value);
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_detached_context_rejects_access() {
        let context = CartContext::detached();

        let result = context.cart();
        assert!(matches!(result, Err(Error::OutsideProvider)));
    }

    #[tokio::test]
    async fn test_provided_context_reaches_the_store() {
        let store = Arc::new(CartStore::new(Arc::new(FakeStorage::default())));
        let context = CartContext::provide(store);

        let cart = context.cart().unwrap();
        cart.add_to_cart(Product::new("p1", "Shirt", "u", 10.0))
            .await
            .unwrap();

        assert_eq!(cart.items().await.len(), 1);
    }

    #[tokio::test]
    async fn test_cloned_context_shares_the_store() {
        let store = Arc::new(CartStore::new(Arc::new(FakeStorage::default())));
        let context = CartContext::provide(store);
        let sibling = context.clone();

        context
            .cart()
            .unwrap()
            .add_to_cart(Product::new("p1", "Shirt", "u", 10.0))
            .await
            .unwrap();

        assert_eq!(sibling.cart().unwrap().items().await.len(), 1);
    }
}
