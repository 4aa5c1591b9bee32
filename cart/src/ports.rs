#![deny(clippy::all)]

use async_trait::async_trait;
use shared::Result;

// Ports are the pluggable extension points for underlying storage implementations

/// Port for the device key-value storage the cart persists through.
/// Values are opaque strings; the cart stores one JSON blob under one key.
#[async_trait]
pub trait KeyValueStore: Send + Sync + 'static {
    async fn get(&self, key: &str) -> Result<Option<String>>;
    async fn set(&self, key: &str, value: String) -> Result<()>;
}
