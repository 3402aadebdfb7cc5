//! Settings persistence trait

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::{ContactInfo, SiteSettings, SocialLinks};

/// Settings repository: site settings, contact info and social links are
/// stored independently.
#[async_trait]
pub trait SettingsRepository: Send + Sync {
    async fn load_site_settings(&self) -> CoreResult<Option<SiteSettings>>;

    async fn save_site_settings(&self, settings: &SiteSettings) -> CoreResult<()>;

    async fn load_contact_info(&self) -> CoreResult<Option<ContactInfo>>;

    async fn save_contact_info(&self, contact: &ContactInfo) -> CoreResult<()>;

    async fn load_social_links(&self) -> CoreResult<Option<SocialLinks>>;

    async fn save_social_links(&self, links: &SocialLinks) -> CoreResult<()>;
}
