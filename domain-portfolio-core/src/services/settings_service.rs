//! 站点设置服务
//!
//! 站点设置、联系方式和社交链接各自独立存储，缺失或无法解析时使用默认值。

use std::sync::Arc;

use crate::error::{CoreError, CoreResult};
use crate::traits::SettingsRepository;
use crate::types::{ContactInfo, SiteSettings, SocialLinks};

/// 站点设置服务
pub struct SettingsService {
    repository: Arc<dyn SettingsRepository>,
}

impl SettingsService {
    #[must_use]
    pub fn new(repository: Arc<dyn SettingsRepository>) -> Self {
        Self { repository }
    }

    pub async fn get_site_settings(&self) -> CoreResult<SiteSettings> {
        or_default(self.repository.load_site_settings().await, "site settings")
    }

    pub async fn save_site_settings(&self, settings: &SiteSettings) -> CoreResult<()> {
        self.repository.save_site_settings(settings).await?;
        log::info!("Site settings saved");
        Ok(())
    }

    pub async fn get_contact_info(&self) -> CoreResult<ContactInfo> {
        or_default(self.repository.load_contact_info().await, "contact info")
    }

    pub async fn save_contact_info(&self, contact: &ContactInfo) -> CoreResult<()> {
        self.repository.save_contact_info(contact).await?;
        log::info!("Contact info saved");
        Ok(())
    }

    pub async fn get_social_links(&self) -> CoreResult<SocialLinks> {
        or_default(self.repository.load_social_links().await, "social links")
    }

    pub async fn save_social_links(&self, links: &SocialLinks) -> CoreResult<()> {
        self.repository.save_social_links(links).await?;
        log::info!("Social links saved");
        Ok(())
    }
}

/// Missing or unreadable blobs fall back to defaults; storage failures propagate.
fn or_default<T: Default>(loaded: CoreResult<Option<T>>, what: &str) -> CoreResult<T> {
    match loaded {
        Ok(value) => Ok(value.unwrap_or_default()),
        Err(CoreError::SerializationError(e)) => {
            log::warn!("Ignoring unreadable {what}, using defaults: {e}");
            Ok(T::default())
        }
        Err(e) => Err(e),
    }
}
