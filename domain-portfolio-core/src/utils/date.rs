//! Expiry date helpers.
//!
//! Expiry values are ISO calendar dates (`YYYY-MM-DD`); full RFC3339
//! timestamps are accepted too and reduced to their UTC date.

use chrono::{DateTime, NaiveDate, Utc};

const ISO_DATE: &str = "%Y-%m-%d";

/// Parses an expiry string into a calendar date.
pub fn parse_expiry(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, ISO_DATE).ok().or_else(|| {
        DateTime::parse_from_rfc3339(s)
            .ok()
            .map(|dt| dt.with_timezone(&Utc).date_naive())
    })
}

/// Today's UTC date as `YYYY-MM-DD`.
pub fn today_iso() -> String {
    Utc::now().date_naive().format(ISO_DATE).to_string()
}
