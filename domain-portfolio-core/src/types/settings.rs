//! Site presentation settings

use serde::{Deserialize, Serialize};

/// Enumerated theme token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Terminal,
    Modern,
    Minimal,
}

/// Site settings.
///
/// The admin password is never part of this struct; legacy blobs that still
/// carry `adminPassword` (or `customCss` / `customJs`) have those keys ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteSettings {
    pub site_name: String,
    pub site_title: String,
    pub site_description: String,
    pub theme: Theme,
    pub enable_analytics: bool,
    pub enable_notifications: bool,
    pub footer_text: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            site_name: "域名管理".to_string(),
            site_title: "我的域名收藏".to_string(),
            site_description: "管理和展示我的域名投资组合".to_string(),
            theme: Theme::Terminal,
            enable_analytics: false,
            enable_notifications: true,
            footer_text: "© 2022-2025 域名管理系统".to_string(),
        }
    }
}

/// Contact information shown in the footer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactInfo {
    pub email: String,
    pub wechat: String,
}

impl Default for ContactInfo {
    fn default() -> Self {
        Self {
            email: "contact@example.com".to_string(),
            wechat: "DomainManager".to_string(),
        }
    }
}

/// Social links shown in the footer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SocialLinks {
    pub github: String,
    pub blog: String,
}

impl Default for SocialLinks {
    fn default() -> Self {
        Self {
            github: "https://github.com/username".to_string(),
            blog: "/blog".to_string(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn legacy_blob_drops_password_and_custom_code() {
        let json = r#"{
            "siteName": "Mine",
            "adminPassword": "******",
            "theme": "modern",
            "customCss": "body{}",
            "customJs": "alert(1)"
        }"#;
        let s: SiteSettings = serde_json::from_str(json).unwrap();
        assert_eq!(s.site_name, "Mine");
        assert_eq!(s.theme, Theme::Modern);
        // Missing keys keep their defaults
        assert_eq!(s.site_title, "我的域名收藏");

        let out = serde_json::to_value(&s).unwrap();
        assert!(out.get("adminPassword").is_none());
        assert!(out.get("customJs").is_none());
    }

    #[test]
    fn partial_contact_keeps_defaults() {
        let c: ContactInfo = serde_json::from_str(r#"{"email":"me@x.dev"}"#).unwrap();
        assert_eq!(c.email, "me@x.dev");
        assert_eq!(c.wechat, "DomainManager");
    }
}
