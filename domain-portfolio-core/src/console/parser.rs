//! `domain-list` command parser

use std::sync::LazyLock;

use regex::Regex;

use crate::types::{DomainFilter, DomainStatus};

/// The only recognised command family
pub const COMMAND_PREFIX: &str = "domain-list";

#[allow(clippy::expect_used)]
static PROVIDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"--provider=([A-Za-z0-9_]+)").expect("provider pattern is valid"));

#[allow(clippy::expect_used)]
static RENEWAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"--renewal=([0-9]+)年").expect("renewal pattern is valid"));

/// Derives a filter from a raw command string.
///
/// Flags are checked in a fixed priority order (`--all`, `--active`,
/// `--expiring`, `--parked`, `--provider`, `--renewal`) and the first flag
/// present decides the result. Returns `None` when the command is not a
/// `domain-list` command, carries no known flag, or the selected flag's
/// value does not parse.
pub fn parse_command(command: &str) -> Option<DomainFilter> {
    if !command.starts_with(COMMAND_PREFIX) {
        return None;
    }

    if command.contains("--all") {
        return Some(DomainFilter::All);
    }

    let status = [
        ("--active", DomainStatus::Active),
        ("--expiring", DomainStatus::Expiring),
        ("--parked", DomainStatus::Parked),
    ]
    .into_iter()
    .find(|(flag, _)| command.contains(flag));
    if let Some((_, status)) = status {
        return Some(DomainFilter::Status {
            value: status.label().to_string(),
        });
    }

    if command.contains("--provider") {
        return PROVIDER_RE
            .captures(command)
            .map(|caps| DomainFilter::Provider {
                value: caps[1].to_string(),
            });
    }

    if command.contains("--renewal") {
        return RENEWAL_RE
            .captures(command)
            .map(|caps| DomainFilter::Renewal {
                value: format!("{}年", &caps[1]),
            });
    }

    None
}
