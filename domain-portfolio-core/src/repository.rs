//! Repositories backed by a `KeyValueStore`

use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{CoreError, CoreResult};
use crate::traits::{keys, DomainRepository, KeyValueStore, SettingsRepository};
use crate::types::{ContactInfo, DomainRecord, SiteSettings, SocialLinks};

/// Implements `DomainRepository` and `SettingsRepository` on top of any
/// `KeyValueStore`, one JSON blob per storage key.
pub struct KeyValueRepository {
    store: Arc<dyn KeyValueStore>,
}

impl KeyValueRepository {
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    async fn read<T: DeserializeOwned>(&self, key: &str) -> CoreResult<Option<T>> {
        let Some(value) = self.store.get(key).await? else {
            return Ok(None);
        };
        serde_json::from_value(value)
            .map(Some)
            .map_err(|e| CoreError::SerializationError(format!("Invalid '{key}' data: {e}")))
    }

    async fn write<T: Serialize + Sync + ?Sized>(&self, key: &str, value: &T) -> CoreResult<()> {
        let value = serde_json::to_value(value)?;
        self.store.set(key, value).await
    }
}

#[async_trait]
impl DomainRepository for KeyValueRepository {
    async fn load(&self) -> CoreResult<Option<Vec<DomainRecord>>> {
        self.read(keys::DOMAINS).await
    }

    async fn save(&self, records: &[DomainRecord]) -> CoreResult<()> {
        self.write(keys::DOMAINS, records).await?;
        log::debug!("Saved {} domain records", records.len());
        Ok(())
    }
}

#[async_trait]
impl SettingsRepository for KeyValueRepository {
    async fn load_site_settings(&self) -> CoreResult<Option<SiteSettings>> {
        self.read(keys::SITE_SETTINGS).await
    }

    async fn save_site_settings(&self, settings: &SiteSettings) -> CoreResult<()> {
        self.write(keys::SITE_SETTINGS, settings).await
    }

    async fn load_contact_info(&self) -> CoreResult<Option<ContactInfo>> {
        self.read(keys::CONTACT_INFO).await
    }

    async fn save_contact_info(&self, contact: &ContactInfo) -> CoreResult<()> {
        self.write(keys::CONTACT_INFO, contact).await
    }

    async fn load_social_links(&self) -> CoreResult<Option<SocialLinks>> {
        self.read(keys::SOCIAL_LINKS).await
    }

    async fn save_social_links(&self, links: &SocialLinks) -> CoreResult<()> {
        self.write(keys::SOCIAL_LINKS, links).await
    }
}
