//! Filter and sort directives for the domain list

use serde::{Deserialize, Serialize};

/// Declarative filter over the domain collection.
///
/// Serialized as `{"type": "...", "value": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DomainFilter {
    /// Every record passes
    #[default]
    All,
    /// Exact match against the status label
    Status { value: String },
    /// Case-insensitive exact match against the provider
    Provider { value: String },
    /// Exact match against the renewal period string
    Renewal { value: String },
    /// Unrecognised filter type, treated as `All`
    #[serde(other)]
    Unknown,
}

impl DomainFilter {
    /// Builds a filter from loose `(type, value)` parts, e.g. query parameters.
    ///
    /// Unknown types and typed filters without a value fall back to `All`.
    #[must_use]
    pub fn from_parts(kind: &str, value: Option<String>) -> Self {
        match (kind, value) {
            ("status", Some(value)) => Self::Status { value },
            ("provider", Some(value)) => Self::Provider { value },
            ("renewal", Some(value)) => Self::Renewal { value },
            _ => Self::All,
        }
    }
}

/// Field the list is sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    Name,
    Expiry,
    RenewalPeriod,
    Provider,
    Status,
    #[default]
    DisplayOrder,
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// The opposite direction (header click toggles)
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

/// Sort directive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortSpec {
    #[serde(default)]
    pub field: SortField,
    #[serde(default)]
    pub direction: SortDirection,
}

impl SortSpec {
    #[must_use]
    pub const fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Selecting the current field flips the direction; a new field starts ascending.
    #[must_use]
    pub fn select(self, field: SortField) -> Self {
        if field == self.field {
            Self::new(field, self.direction.toggled())
        } else {
            Self::new(field, SortDirection::Asc)
        }
    }
}

/// Full list query: filter + sort
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    #[serde(default)]
    pub filter: DomainFilter,
    #[serde(default)]
    pub sort: SortSpec,
}
