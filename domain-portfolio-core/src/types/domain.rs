//! 域名记录类型定义

use std::fmt;

use serde::{Deserialize, Serialize};

/// 永久域名的到期日占位值
pub const PERMANENT_EXPIRY: &str = "永久";

/// 无续期时的续期周期显示文本
pub const NO_RENEWAL: &str = "无";

/// 续期单位
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RenewalUnit {
    #[serde(rename = "天")]
    Day,
    #[serde(rename = "周")]
    Week,
    #[serde(rename = "月")]
    Month,
    #[serde(rename = "半年")]
    HalfYear,
    #[serde(rename = "年")]
    Year,
    #[default]
    #[serde(rename = "无")]
    None,
}

impl RenewalUnit {
    /// 单位的显示标签
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Day => "天",
            Self::Week => "周",
            Self::Month => "月",
            Self::HalfYear => "半年",
            Self::Year => "年",
            Self::None => NO_RENEWAL,
        }
    }
}

impl fmt::Display for RenewalUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 域名状态（用户设置，不根据到期日计算）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DomainStatus {
    #[default]
    #[serde(rename = "活跃")]
    Active,
    #[serde(rename = "即将到期")]
    Expiring,
    #[serde(rename = "停放")]
    Parked,
}

impl DomainStatus {
    /// 所有状态（按声明顺序）
    pub const ALL: [Self; 3] = [Self::Active, Self::Expiring, Self::Parked];

    /// 状态的显示标签
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Active => "活跃",
            Self::Expiring => "即将到期",
            Self::Parked => "停放",
        }
    }
}

impl fmt::Display for DomainStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 根据续期数值和单位生成续期周期文本
///
/// 数值为 0 或单位为「无」时返回「无」。
#[must_use]
pub fn renewal_period(value: u32, unit: RenewalUnit) -> String {
    if value == 0 || unit == RenewalUnit::None {
        NO_RENEWAL.to_string()
    } else {
        format!("{value}{unit}")
    }
}

/// 域名记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainRecord {
    pub id: u64,
    pub name: String,
    /// ISO 日期（`YYYY-MM-DD`），永久域名为 `永久`
    pub expiry: String,
    /// 派生字段，随 `renewal_value` / `renewal_unit` 的修改重新计算
    pub renewal_period: String,
    #[serde(default)]
    pub renewal_value: u32,
    #[serde(default)]
    pub renewal_unit: RenewalUnit,
    #[serde(default)]
    pub provider: String,
    #[serde(default)]
    pub console_url: String,
    #[serde(default)]
    pub status: DomainStatus,
    #[serde(default)]
    pub is_permanent: bool,
    /// 前台显示顺序
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_order: Option<i64>,
}

impl DomainRecord {
    /// 重新计算续期周期文本
    pub fn refresh_renewal_period(&mut self) {
        self.renewal_period = renewal_period(self.renewal_value, self.renewal_unit);
    }

    /// 显示顺序（缺失视为 0）
    #[must_use]
    pub fn order(&self) -> i64 {
        self.display_order.unwrap_or(0)
    }

    /// 克隆时使用的新名称：`example.com` -> `example-clone.com`
    #[must_use]
    pub fn clone_name(&self) -> String {
        match self.name.split_once('.') {
            Some((head, rest)) => format!("{head}-clone.{rest}"),
            None => format!("{}-clone", self.name),
        }
    }
}

/// 新增域名请求
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDomainRequest {
    pub name: String,
    /// 为空时使用当天日期
    #[serde(default)]
    pub expiry: Option<String>,
    #[serde(default)]
    pub renewal_value: u32,
    #[serde(default)]
    pub renewal_unit: RenewalUnit,
    #[serde(default)]
    pub provider: String,
    #[serde(default)]
    pub console_url: String,
    #[serde(default)]
    pub status: DomainStatus,
    #[serde(default)]
    pub is_permanent: bool,
}

/// 域名字段更新请求（支持部分更新）
///
/// `is_permanent` 不在此处修改，见 `DomainService::set_permanent`。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub renewal_value: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub renewal_unit: Option<RenewalUnit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub console_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<DomainStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_order: Option<i64>,
}

impl DomainUpdate {
    /// 应用更新到现有记录
    pub fn apply_to(&self, record: &mut DomainRecord) {
        if let Some(ref name) = self.name {
            record.name.clone_from(name);
        }
        if let Some(ref expiry) = self.expiry {
            record.expiry.clone_from(expiry);
        }
        if let Some(ref provider) = self.provider {
            record.provider.clone_from(provider);
        }
        if let Some(ref console_url) = self.console_url {
            record.console_url.clone_from(console_url);
        }
        if let Some(status) = self.status {
            record.status = status;
        }
        if let Some(display_order) = self.display_order {
            record.display_order = Some(display_order);
        }

        let renewal_touched = self.renewal_value.is_some() || self.renewal_unit.is_some();
        if let Some(value) = self.renewal_value {
            record.renewal_value = value;
        }
        if let Some(unit) = self.renewal_unit {
            record.renewal_unit = unit;
        }
        if renewal_touched {
            record.refresh_renewal_period();
        }
    }
}

/// 显示顺序移动方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveDirection {
    Up,
    Down,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn record(name: &str) -> DomainRecord {
        DomainRecord {
            id: 1,
            name: name.to_string(),
            expiry: "2025-12-31".to_string(),
            renewal_period: "1年".to_string(),
            renewal_value: 1,
            renewal_unit: RenewalUnit::Year,
            provider: "Namecheap".to_string(),
            console_url: String::new(),
            status: DomainStatus::Active,
            is_permanent: false,
            display_order: Some(0),
        }
    }

    #[test]
    fn renewal_period_formats_value_and_unit() {
        assert_eq!(renewal_period(30, RenewalUnit::Day), "30天");
        assert_eq!(renewal_period(1, RenewalUnit::HalfYear), "1半年");
    }

    #[test]
    fn renewal_period_none_for_zero_or_unit_none() {
        assert_eq!(renewal_period(0, RenewalUnit::Year), "无");
        assert_eq!(renewal_period(3, RenewalUnit::None), "无");
    }

    #[test]
    fn clone_name_inserts_suffix_after_first_label() {
        assert_eq!(record("example.com").clone_name(), "example-clone.com");
        assert_eq!(record("a.b.co.uk").clone_name(), "a-clone.b.co.uk");
        assert_eq!(record("localhost").clone_name(), "localhost-clone");
    }

    #[test]
    fn update_recomputes_period_when_unit_changes() {
        let mut r = record("example.com");
        let update = DomainUpdate {
            renewal_unit: Some(RenewalUnit::Month),
            ..Default::default()
        };
        update.apply_to(&mut r);
        assert_eq!(r.renewal_period, "1月");
    }

    #[test]
    fn update_leaves_period_alone_for_other_fields() {
        let mut r = record("example.com");
        r.renewal_period = "legacy".to_string();
        let update = DomainUpdate {
            provider: Some("GoDaddy".to_string()),
            ..Default::default()
        };
        update.apply_to(&mut r);
        assert_eq!(r.provider, "GoDaddy");
        assert_eq!(r.renewal_period, "legacy");
    }

    #[test]
    fn deserializes_stored_record_with_missing_fields() {
        let json = r#"{
            "id": 3,
            "name": "webstore.shop",
            "expiry": "2024-08-22",
            "renewalPeriod": "1年",
            "provider": "Google",
            "consoleUrl": "https://domains.google",
            "status": "即将到期"
        }"#;
        let r: DomainRecord = serde_json::from_str(json).unwrap();
        assert_eq!(r.status, DomainStatus::Expiring);
        assert_eq!(r.renewal_unit, RenewalUnit::None);
        assert_eq!(r.renewal_value, 0);
        assert!(!r.is_permanent);
        assert_eq!(r.display_order, None);
        assert_eq!(r.order(), 0);
    }

    #[test]
    fn status_serializes_as_label() {
        let json = serde_json::to_string(&DomainStatus::Parked).unwrap();
        assert_eq!(json, "\"停放\"");
    }
}
