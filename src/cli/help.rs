use crate::cli::output::{info as output_info, section as output_section};
use crate::cli::registry::{CommandEntry, CommandRegistry};

pub fn print_overview(registry: &CommandRegistry) {
    output_section("Available commands");
    for entry in registry.list() {
        output_info(format!("  {:<10} {}", entry.name, entry.description));
    }
    output_info("Use `help <command>` for details. Press Tab to complete a command name.");
}

pub fn print_command(entry: &CommandEntry) {
    output_section(format!("Help: {}", entry.name));
    output_info(format!("  Description: {}", entry.description));
    output_info(format!("  Usage: {}", entry.usage));
}
