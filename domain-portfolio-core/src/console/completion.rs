//! Example commands and prefix completion

use serde::Serialize;

/// An example command shown under the console
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExampleCommand {
    pub command: &'static str,
    pub description: &'static str,
}

/// Commands offered as clickable examples and used for completion.
pub const EXAMPLE_COMMANDS: [ExampleCommand; 6] = [
    ExampleCommand {
        command: "domain-list --all",
        description: "显示所有域名",
    },
    ExampleCommand {
        command: "domain-list --active",
        description: "仅显示活跃域名",
    },
    ExampleCommand {
        command: "domain-list --expiring",
        description: "仅显示即将到期域名",
    },
    ExampleCommand {
        command: "domain-list --parked",
        description: "仅显示停放域名",
    },
    ExampleCommand {
        command: "domain-list --provider=Namecheap",
        description: "按提供商筛选",
    },
    ExampleCommand {
        command: "domain-list --renewal=1年",
        description: "按续期周期筛选",
    },
];

/// Suggests the rest of the first candidate that starts with `input`
/// (case-insensitive) and is not `input` itself.
///
/// Returns only the missing suffix, e.g. `"arked"` for `"domain-list --p"`.
pub fn suggest<'a, I>(input: &str, candidates: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    if input.is_empty() {
        return None;
    }
    let needle = input.to_lowercase();
    let typed_chars = input.chars().count();

    candidates
        .into_iter()
        .find(|cmd| *cmd != input && cmd.to_lowercase().starts_with(&needle))
        .map(|cmd| {
            let split = cmd
                .char_indices()
                .nth(typed_chars)
                .map_or(cmd.len(), |(i, _)| i);
            &cmd[split..]
        })
}

/// Completion against the built-in example commands
pub fn suggest_example(input: &str) -> Option<&'static str> {
    suggest(input, EXAMPLE_COMMANDS.iter().map(|c| c.command))
}
