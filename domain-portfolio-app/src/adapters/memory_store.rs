//! In-process key-value store.

use std::collections::HashMap;

use async_trait::async_trait;
use domain_portfolio_core::error::CoreResult;
use domain_portfolio_core::traits::KeyValueStore;
use serde_json::Value;
use tokio::sync::RwLock;

/// Keeps every blob in memory; contents are lost when the process exits.
#[derive(Default)]
pub struct MemoryStore {
    data: RwLock<HashMap<String, Value>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> CoreResult<Option<Value>> {
        Ok(self.data.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: Value) -> CoreResult<()> {
        self.data.write().await.insert(key.to_string(), value);
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn set_then_get() {
        let store = MemoryStore::new();
        assert!(store.get("k").await.unwrap().is_none());

        store.set("k", serde_json::json!([1, 2])).await.unwrap();
        assert_eq!(store.get("k").await.unwrap(), Some(serde_json::json!([1, 2])));
    }
}
