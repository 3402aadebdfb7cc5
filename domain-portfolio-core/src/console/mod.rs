//! Command console
//!
//! A terminal-like input line over the domain list: `domain-list` commands
//! set the active filter, submitted commands are kept in a navigable history,
//! and partial input is completed against a set of example commands.

mod completion;
mod history;
mod parser;

pub use completion::{suggest, suggest_example, ExampleCommand, EXAMPLE_COMMANDS};
pub use history::CommandHistory;
pub use parser::{parse_command, COMMAND_PREFIX};

use crate::types::DomainFilter;

/// Command the history starts with
pub const INITIAL_COMMAND: &str = "domain-list --all";

/// One console: history plus the filter the last command selected.
#[derive(Debug, Clone)]
pub struct ConsoleSession {
    history: CommandHistory,
    filter: DomainFilter,
}

impl Default for ConsoleSession {
    fn default() -> Self {
        Self {
            history: CommandHistory::with_entries([INITIAL_COMMAND]),
            filter: DomainFilter::All,
        }
    }
}

impl ConsoleSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs a command and returns the filter now in effect.
    ///
    /// Blank input is ignored. Other input is recorded verbatim; commands the
    /// parser does not understand leave the filter unchanged.
    pub fn submit(&mut self, command: &str) -> &DomainFilter {
        if command.trim().is_empty() {
            return &self.filter;
        }

        self.history.push(command);
        match parse_command(command) {
            Some(filter) => {
                log::debug!("Console filter set by '{command}': {filter:?}");
                self.filter = filter;
            }
            None => log::debug!("Console command '{command}' left the filter unchanged"),
        }
        &self.filter
    }

    #[must_use]
    pub fn filter(&self) -> &DomainFilter {
        &self.filter
    }

    #[must_use]
    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut CommandHistory {
        &mut self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_seeded_history_and_all_filter() {
        let session = ConsoleSession::new();
        assert_eq!(session.history().entries(), ["domain-list --all"]);
        assert_eq!(session.filter(), &DomainFilter::All);
    }

    #[test]
    fn submit_updates_filter_and_history() {
        let mut session = ConsoleSession::new();
        let filter = session.submit("domain-list --provider=GoDaddy").clone();
        assert_eq!(
            filter,
            DomainFilter::Provider {
                value: "GoDaddy".to_string()
            }
        );
        assert_eq!(session.history().entries().len(), 2);
    }

    #[test]
    fn unknown_command_keeps_filter() {
        let mut session = ConsoleSession::new();
        session.submit("domain-list --parked");
        session.submit("help");
        assert_eq!(
            session.filter(),
            &DomainFilter::Status {
                value: "停放".to_string()
            }
        );
        assert_eq!(session.history().entries().last().map(String::as_str), Some("help"));
    }

    #[test]
    fn blank_command_is_ignored() {
        let mut session = ConsoleSession::new();
        session.submit("   ");
        assert_eq!(session.history().entries().len(), 1);
    }

    #[test]
    fn leading_whitespace_is_not_a_command() {
        let mut session = ConsoleSession::new();
        session.submit(" domain-list --parked");
        assert_eq!(session.filter(), &DomainFilter::All);
        assert_eq!(
            session.history().entries().last().map(String::as_str),
            Some(" domain-list --parked")
        );
    }

    #[test]
    fn history_navigation_after_submit() {
        let mut session = ConsoleSession::new();
        session.submit("domain-list --active");
        let history = session.history_mut();
        assert_eq!(history.older(), Some("domain-list --active"));
        assert_eq!(history.older(), Some("domain-list --all"));
        assert_eq!(history.newer(), Some("domain-list --active"));
    }
}
