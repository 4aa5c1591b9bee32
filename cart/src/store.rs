use crate::domain::{CartItem, Product};
use crate::ports::KeyValueStore;
use shared::{Error, Result};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// Storage key the full cart list is persisted under, kept compatible with
/// carts written by earlier app versions.
pub const STORAGE_KEY: &str = "@GoMarketplace: products";

/// In-memory cart state mirrored to a key-value store under a single key.
/// Every mutation rewrites the whole persisted list.
pub struct CartStore {
    items: RwLock<Vec<CartItem>>,
    storage: Arc<dyn KeyValueStore>,
}

impl CartStore {
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self {
            items: RwLock::new(Vec::new()),
            storage,
        }
    }

    /// Hydrate the cart from persisted state. Called once at startup; an
    /// absent key leaves the cart empty. A malformed stored value surfaces
    /// as an error and the cart stays empty.
    pub async fn load(&self) -> Result<()> {
        let Some(raw) = self.storage.get(STORAGE_KEY).await? else {
            debug!("no persisted cart found, starting empty");
            return Ok(());
        };

        let loaded: Vec<CartItem> = serde_json::from_str(&raw)
            .map_err(|e| Error::Serialization(format!("failed to parse persisted cart: {e}")))?;

        debug!(items = loaded.len(), "hydrated cart from storage");
        *self.items.write().await = loaded;
        Ok(())
    }

    /// Snapshot of the current line items.
    pub async fn items(&self) -> Vec<CartItem> {
        self.items.read().await.clone()
    }

    /// Add a product to the cart. An existing line for the same id has its
    /// quantity bumped by one; the updated line moves to the end of the
    /// list. The in-memory update commits before the persistence write, so
    /// a write error reaches the caller with memory already updated.
    pub async fn add_to_cart(&self, product: Product) -> Result<()> {
        let updated = {
            let mut items = self.items.write().await;

            match items.iter().position(|item| item.id == product.id) {
                // The updated line moves to the end, as on first insertion.
                Some(pos) => {
                    let modified = items.remove(pos).incremented();
                    items.push(modified);
                }
                None => items.push(CartItem::from_product(product)),
            }

            items.clone()
        };

        self.persist(&updated).await
    }

    /// Bump the quantity of an existing line by one. Unknown ids are a
    /// no-op.
    pub async fn increment(&self, id: &str) -> Result<()> {
        let found = self
            .items
            .read()
            .await
            .iter()
            .find(|item| item.id == id)
            .map(CartItem::product);

        match found {
            Some(product) => self.add_to_cart(product).await,
            None => Ok(()),
        }
    }

    /// Drop the quantity of an existing line by one, never below zero.
    /// Zero-quantity lines stay in the cart; unknown ids are a no-op.
    pub async fn decrement(&self, id: &str) -> Result<()> {
        let updated = {
            let mut items = self.items.write().await;

            let Some(pos) = items.iter().position(|item| item.id == id) else {
                return Ok(());
            };
            if items[pos].quantity == 0 {
                return Ok(());
            }

            let modified = items.remove(pos).decremented();
            items.push(modified);
            items.clone()
        };

        self.persist(&updated).await
    }

    /// Overwrite the persisted list with the given one. Memory has already
    /// committed by the time this runs; a failed write leaves storage behind
    /// memory until the next successful write.
    async fn persist(&self, items: &[CartItem]) -> Result<()> {
        let encoded = serde_json::to_string(items)
            .map_err(|e| Error::Serialization(format!("failed to encode cart: {e}")))?;

        debug!(items = items.len(), "persisting cart");
        self.storage.set(STORAGE_KEY, encoded).await
    }
}

impl std::fmt::Debug for CartStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore")
            .field("storage", &"<dyn KeyValueStore>")
            .finish()
    }
}
