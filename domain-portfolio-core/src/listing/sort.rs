//! Multi-key domain comparator.
//!
//! Two rules are absolute and ignore the sort direction: permanent records
//! always come after dated ones when sorting by expiry, and a `无` renewal
//! period always comes first when sorting by renewal period. Every other
//! comparison is reversed for a descending sort.

use std::cmp::Ordering;
use std::sync::LazyLock;

use regex::Regex;

use crate::types::{DomainRecord, SortDirection, SortField, SortSpec, NO_RENEWAL};
use crate::utils::date::parse_expiry;
use crate::utils::text::locale_compare;

#[allow(clippy::expect_used)]
static PERIOD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)(.*)$").expect("period pattern is valid"));

/// Outcome of comparing two records on one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Comparison {
    /// Holds regardless of direction
    Absolute(Ordering),
    /// Reversed for a descending sort
    Relative(Ordering),
}

impl Comparison {
    fn resolve(self, direction: SortDirection) -> Ordering {
        match (self, direction) {
            (Self::Absolute(o), _) | (Self::Relative(o), SortDirection::Asc) => o,
            (Self::Relative(o), SortDirection::Desc) => o.reverse(),
        }
    }
}

/// Compares two records under `spec`.
pub fn compare(a: &DomainRecord, b: &DomainRecord, spec: SortSpec) -> Ordering {
    let comparison = match spec.field {
        SortField::DisplayOrder => Comparison::Relative(a.order().cmp(&b.order())),
        SortField::Name => Comparison::Relative(locale_compare(&a.name, &b.name)),
        SortField::Provider => Comparison::Relative(locale_compare(&a.provider, &b.provider)),
        SortField::Status => {
            Comparison::Relative(locale_compare(a.status.label(), b.status.label()))
        }
        SortField::Expiry => compare_expiry(a, b),
        SortField::RenewalPeriod => compare_periods(&a.renewal_period, &b.renewal_period),
    };
    comparison.resolve(spec.direction)
}

fn compare_expiry(a: &DomainRecord, b: &DomainRecord) -> Comparison {
    match (a.is_permanent, b.is_permanent) {
        (true, false) => Comparison::Absolute(Ordering::Greater),
        (false, true) => Comparison::Absolute(Ordering::Less),
        (true, true) => Comparison::Absolute(Ordering::Equal),
        (false, false) => {
            // Unparseable dates go after real ones.
            let ordering = match (parse_expiry(&a.expiry), parse_expiry(&b.expiry)) {
                (Some(x), Some(y)) => x.cmp(&y),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            };
            Comparison::Relative(ordering)
        }
    }
}

fn compare_periods(a: &str, b: &str) -> Comparison {
    match (a == NO_RENEWAL, b == NO_RENEWAL) {
        (true, false) => return Comparison::Absolute(Ordering::Less),
        (false, true) => return Comparison::Absolute(Ordering::Greater),
        (true, true) => return Comparison::Absolute(Ordering::Equal),
        (false, false) => {}
    }

    let (Some(ca), Some(cb)) = (PERIOD_RE.captures(a), PERIOD_RE.captures(b)) else {
        return Comparison::Relative(locale_compare(a, b));
    };

    let (digits_a, unit_a) = (&ca[1], &ca[2]);
    let (digits_b, unit_b) = (&cb[1], &cb[2]);

    let ordering = if unit_a == unit_b {
        compare_digits(digits_a, digits_b)
    } else {
        unit_priority(unit_a).cmp(&unit_priority(unit_b))
    };
    Comparison::Relative(ordering)
}

/// Numeric comparison of two ASCII digit strings of any length.
fn compare_digits(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// 天 < 周 < 月 < 半年 < 年; anything else ranks lowest.
fn unit_priority(unit: &str) -> u8 {
    match unit {
        "天" => 1,
        "周" => 2,
        "月" => 3,
        "半年" => 4,
        "年" => 5,
        _ => 0,
    }
}
