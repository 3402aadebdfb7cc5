//! Key-value persistence abstraction

use async_trait::async_trait;

use crate::error::CoreResult;

/// Storage keys used by the dashboard
pub mod keys {
    /// Full domain collection
    pub const DOMAINS: &str = "domainData";
    /// Site settings
    pub const SITE_SETTINGS: &str = "siteSettings";
    /// Contact information
    pub const CONTACT_INFO: &str = "contactInfo";
    /// Social links
    pub const SOCIAL_LINKS: &str = "simpleSocialLinks";
}

/// Key-value store holding one JSON blob per key.
///
/// There is no transactionality across keys.
///
/// Platform implementations:
/// - `JsonFileStore`: one JSON object file on disk
/// - `MemoryStore`: process memory (tests, ephemeral deployments)
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the blob stored under `key`
    ///
    /// # Returns
    /// * `Some(value)` - blob found
    /// * `None` - key never written
    async fn get(&self, key: &str) -> CoreResult<Option<serde_json::Value>>;

    /// Replace the blob stored under `key`
    async fn set(&self, key: &str, value: serde_json::Value) -> CoreResult<()>;
}
