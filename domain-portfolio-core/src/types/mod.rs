//! 类型定义模块

mod domain;
mod import;
mod listing;
mod response;
mod settings;

pub use domain::{
    renewal_period, CreateDomainRequest, DomainRecord, DomainStatus, DomainUpdate, MoveDirection,
    RenewalUnit, NO_RENEWAL, PERMANENT_EXPIRY,
};
pub use import::{ImportFile, ImportResult, ImportedDomain, TEMPLATE_FILE_NAME};
pub use listing::{DomainFilter, ListQuery, SortDirection, SortField, SortSpec};
pub use response::{AuthResponse, LoginRequest};
pub use settings::{ContactInfo, SiteSettings, SocialLinks, Theme};
