//! Filter predicate

use crate::types::{DomainFilter, DomainRecord};

/// Whether `record` passes `filter`.
pub fn matches(filter: &DomainFilter, record: &DomainRecord) -> bool {
    match filter {
        DomainFilter::All | DomainFilter::Unknown => true,
        DomainFilter::Status { value } => record.status.label() == value,
        DomainFilter::Provider { value } => record.provider.to_lowercase() == value.to_lowercase(),
        DomainFilter::Renewal { value } => record.renewal_period == *value,
    }
}
