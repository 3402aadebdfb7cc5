//! 首次加载时写入的示例域名

use crate::types::{
    renewal_period, DomainRecord, DomainStatus, RenewalUnit, PERMANENT_EXPIRY,
};

struct Sample {
    name: &'static str,
    expiry: &'static str,
    renewal: (u32, RenewalUnit),
    /// Stored label when it differs from the derived one
    period_label: Option<&'static str>,
    provider: &'static str,
    console_url: &'static str,
    status: DomainStatus,
    is_permanent: bool,
}

const SAMPLES: [Sample; 5] = [
    Sample {
        name: "example.com",
        expiry: "2025-12-31",
        renewal: (1, RenewalUnit::Year),
        period_label: None,
        provider: "Namecheap",
        console_url: "https://namecheap.com",
        status: DomainStatus::Active,
        is_permanent: false,
    },
    Sample {
        name: "techblog.io",
        expiry: "2026-05-15",
        renewal: (2, RenewalUnit::Year),
        period_label: None,
        provider: "GoDaddy",
        console_url: "https://godaddy.com",
        status: DomainStatus::Active,
        is_permanent: false,
    },
    Sample {
        name: "webstore.shop",
        expiry: "2024-08-22",
        renewal: (30, RenewalUnit::Day),
        period_label: None,
        provider: "Google",
        console_url: "https://domains.google",
        status: DomainStatus::Expiring,
        is_permanent: false,
    },
    Sample {
        name: "dev-tools.net",
        expiry: "2025-11-05",
        renewal: (6, RenewalUnit::Month),
        period_label: Some("6个月"),
        provider: "Namecheap",
        console_url: "https://namecheap.com",
        status: DomainStatus::Active,
        is_permanent: false,
    },
    Sample {
        name: "ai-solutions.tech",
        expiry: PERMANENT_EXPIRY,
        renewal: (0, RenewalUnit::None),
        period_label: None,
        provider: "Cloudflare",
        console_url: "https://cloudflare.com",
        status: DomainStatus::Parked,
        is_permanent: true,
    },
];

/// 默认域名组合（id 1..=5，显示顺序 0..=4）
#[must_use]
pub fn default_portfolio() -> Vec<DomainRecord> {
    SAMPLES
        .iter()
        .zip(1_u64..)
        .map(|(s, id)| {
            let (renewal_value, renewal_unit) = s.renewal;
            DomainRecord {
                id,
                name: s.name.to_string(),
                expiry: s.expiry.to_string(),
                renewal_period: s.period_label.map_or_else(
                    || renewal_period(renewal_value, renewal_unit),
                    str::to_string,
                ),
                renewal_value,
                renewal_unit,
                provider: s.provider.to_string(),
                console_url: s.console_url.to_string(),
                status: s.status,
                is_permanent: s.is_permanent,
                display_order: i64::try_from(id - 1).ok(),
            }
        })
        .collect()
}
