pub mod config;
pub mod ledger;
pub mod system;
pub mod transaction;

use crate::cli::registry::{CommandEntry, CommandRegistry};

/// Order in which commands appear in `help`.
const ROOT_COMMAND_ORDER: &[&str] = &[
    "list", "search", "filter", "reset", "add", "cancel", "form", "config", "version", "help",
    "exit",
];

pub(crate) fn all_definitions() -> Vec<CommandEntry> {
    let mut commands = Vec::new();
    commands.extend(ledger::definitions());
    commands.extend(transaction::definitions());
    commands.extend(config::definitions());
    commands.extend(system::definitions());
    commands
}

pub(crate) fn register_all(registry: &mut CommandRegistry) {
    let mut definitions = all_definitions();
    definitions.sort_by_key(|entry| {
        ROOT_COMMAND_ORDER
            .iter()
            .position(|name| *name == entry.name)
            .unwrap_or(ROOT_COMMAND_ORDER.len())
    });
    for entry in definitions {
        registry.register(entry);
    }
}
