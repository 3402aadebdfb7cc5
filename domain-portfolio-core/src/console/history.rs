//! Command history with up/down navigation

/// Submitted commands, oldest first, plus a navigation cursor.
#[derive(Debug, Clone, Default)]
pub struct CommandHistory {
    entries: Vec<String>,
    /// Steps back from the newest entry; `None` when not navigating
    cursor: Option<usize>,
}

impl CommandHistory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// History seeded with initial entries
    #[must_use]
    pub fn with_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: entries.into_iter().map(Into::into).collect(),
            cursor: None,
        }
    }

    /// Records a submitted command and resets navigation.
    ///
    /// A command equal to the newest entry is not appended twice.
    pub fn push(&mut self, command: &str) {
        self.cursor = None;
        if self.entries.last().map(String::as_str) != Some(command) {
            self.entries.push(command.to_string());
        }
    }

    /// Steps back (arrow up). Returns the entry to show, or `None` when
    /// already at the oldest entry.
    pub fn older(&mut self) -> Option<&str> {
        let next = self.cursor.map_or(0, |c| c + 1);
        if next >= self.entries.len() {
            return None;
        }
        self.cursor = Some(next);
        self.entry_at(next)
    }

    /// Steps forward (arrow down). Stepping past the newest entry yields an
    /// empty line; `None` when not navigating.
    pub fn newer(&mut self) -> Option<&str> {
        match self.cursor? {
            0 => {
                self.cursor = None;
                Some("")
            }
            c => {
                self.cursor = Some(c - 1);
                self.entry_at(c - 1)
            }
        }
    }

    fn entry_at(&self, steps_back: usize) -> Option<&str> {
        self.entries
            .len()
            .checked_sub(steps_back + 1)
            .and_then(|i| self.entries.get(i))
            .map(String::as_str)
    }

    /// All entries, oldest first
    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}
