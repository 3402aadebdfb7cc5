//! Bulk import/export types

use serde::{Deserialize, Serialize};

use super::domain::{DomainStatus, RenewalUnit};

/// Suggested file name of the downloadable import template
pub const TEMPLATE_FILE_NAME: &str = "domain-template.json";

/// One entry of an import file.
///
/// Only `name` is required; every other field has a default.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportedDomain {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub expiry: Option<String>,
    #[serde(default)]
    pub renewal_value: Option<u32>,
    #[serde(default)]
    pub renewal_unit: Option<RenewalUnit>,
    #[serde(default)]
    pub provider: Option<String>,
    #[serde(default)]
    pub console_url: Option<String>,
    #[serde(default)]
    pub status: Option<DomainStatus>,
    #[serde(default)]
    pub is_permanent: bool,
}

/// Import/export file layout: `{"domains": [...]}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportFile {
    pub domains: Vec<ImportedDomain>,
}

/// Import outcome
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportResult {
    /// Number of records added
    pub imported_count: usize,
    /// Ids assigned to the new records, in file order
    pub ids: Vec<u64>,
}

impl ImportFile {
    /// The two-entry template offered for download
    #[must_use]
    pub fn template() -> Self {
        Self {
            domains: vec![
                ImportedDomain {
                    name: Some("example.com".to_string()),
                    expiry: Some("2025-12-31".to_string()),
                    renewal_value: Some(1),
                    renewal_unit: Some(RenewalUnit::Year),
                    provider: Some("Namecheap".to_string()),
                    console_url: Some("https://namecheap.com".to_string()),
                    status: Some(DomainStatus::Active),
                    is_permanent: false,
                },
                ImportedDomain {
                    name: Some("example-permanent.com".to_string()),
                    expiry: Some(String::new()),
                    renewal_value: Some(2),
                    renewal_unit: Some(RenewalUnit::Year),
                    provider: Some("GoDaddy".to_string()),
                    console_url: Some("https://godaddy.com".to_string()),
                    status: Some(DomainStatus::Active),
                    is_permanent: true,
                },
            ],
        }
    }
}
