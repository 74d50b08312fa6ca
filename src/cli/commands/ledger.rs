//! Viewing commands: the filtered list, search text, and type selector.

use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::output::info as output_info;
use crate::cli::registry::CommandEntry;
use crate::domain::TypeFilter;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "list",
            "Show transactions through the active search and type filter",
            "list",
            cmd_list,
        ),
        CommandEntry::new(
            "search",
            "Filter by name (case-insensitive); no text clears the search",
            "search [text]",
            cmd_search,
        ),
        CommandEntry::new(
            "filter",
            "Show only income, only expense, or all transactions",
            "filter <all|income|expense>",
            cmd_filter,
        ),
        CommandEntry::new(
            "reset",
            "Clear the search text and type filter",
            "reset",
            cmd_reset,
        ),
    ]
}

fn cmd_list(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let view = context.app.apply_filters()?;
    if view.rows.is_empty() && context.app.criteria().is_active() {
        output_info("No transactions match the current filter. Use `reset` to show all.");
    }
    context.remember(view);
    Ok(())
}

fn cmd_search(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let text = args.join(" ");
    let view = context.app.set_search(text)?;
    context.remember(view);
    Ok(())
}

fn cmd_filter(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [value] = args else {
        return Err(CommandError::InvalidArguments(
            "usage: filter <all|income|expense>".into(),
        ));
    };
    let kind: TypeFilter = value.parse().map_err(CommandError::InvalidArguments)?;
    let view = context.app.set_type_filter(kind)?;
    context.remember(view);
    Ok(())
}

fn cmd_reset(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let view = context.app.clear_filters()?;
    context.remember(view);
    Ok(())
}
