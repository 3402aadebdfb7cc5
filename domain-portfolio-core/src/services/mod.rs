//! 业务逻辑服务层

mod auth_service;
mod domain_service;
mod seed;
mod settings_service;

pub use auth_service::AuthService;
pub use domain_service::DomainService;
pub use seed::default_portfolio;
pub use settings_service::SettingsService;

use std::sync::Arc;

use crate::traits::{DomainRepository, SettingsRepository};

/// 服务上下文 - 持有所有依赖
///
/// 平台层需要创建此上下文，并注入平台特定的存储实现。
pub struct ServiceContext {
    /// 域名集合仓库
    pub domain_repository: Arc<dyn DomainRepository>,
    /// 站点设置仓库
    pub settings_repository: Arc<dyn SettingsRepository>,
}

impl ServiceContext {
    /// 创建服务上下文
    #[must_use]
    pub fn new(
        domain_repository: Arc<dyn DomainRepository>,
        settings_repository: Arc<dyn SettingsRepository>,
    ) -> Self {
        Self {
            domain_repository,
            settings_repository,
        }
    }
}
