//! The add-transaction form: open, fill, submit, cancel.

use dialoguer::{Confirm, Input, Select};

use crate::app::FormError;
use crate::cli::core::{CliMode, CommandError, CommandResult, ShellContext};
use crate::cli::output::{error as output_error, info as output_info, success as output_success};
use crate::cli::registry::CommandEntry;
use crate::domain::{Transaction, TransactionType};

const TYPE_CHOICES: [TransactionType; 2] = [TransactionType::Income, TransactionType::Expense];

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "add",
            "Open the transaction form, optionally submitting it in one step",
            "add [<name> <amount> [income|expense]]",
            cmd_add,
        ),
        CommandEntry::new(
            "cancel",
            "Close the transaction form without saving",
            "cancel",
            cmd_cancel,
        ),
        CommandEntry::new(
            "form",
            "Show the transaction form and its current values",
            "form",
            cmd_form,
        ),
    ]
}

fn cmd_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [] => match context.mode() {
            CliMode::Interactive => {
                context.app.open_form();
                run_form_prompt(context)
            }
            CliMode::Script => Err(CommandError::InvalidArguments(
                "usage: add <name> <amount> [income|expense] (prompts are disabled in script mode)"
                    .into(),
            )),
        },
        [name, amount] => {
            let kind = context.app.form().kind;
            submit(context, name, amount, kind)
        }
        [name, amount, kind] => {
            let kind: TransactionType = kind.parse().map_err(CommandError::InvalidArguments)?;
            submit(context, name, amount, kind)
        }
        _ => Err(CommandError::InvalidArguments(
            "usage: add [<name> <amount> [income|expense]]".into(),
        )),
    }
}

/// Opens the form if needed, fills it, and submits. A failed submit leaves the
/// form open with the entered values.
fn submit(
    context: &mut ShellContext,
    name: &str,
    amount: &str,
    kind: TransactionType,
) -> CommandResult {
    context.app.open_form();
    context.app.fill_form(name, amount, kind);
    let (transaction, view) = context.app.submit_form()?;
    report_added(context, &transaction);
    context.remember(view);
    Ok(())
}

fn report_added(context: &ShellContext, transaction: &Transaction) {
    let amount = context
        .app
        .settings()
        .formatter
        .format_signed(transaction.kind, transaction.amount);
    output_success(format!(
        "Added {} ({}) as #{}.",
        transaction.name, amount, transaction.id
    ));
}

/// Prompts for each field, pre-filled with the form's current values, until a
/// submit succeeds or the user gives up.
fn run_form_prompt(context: &mut ShellContext) -> CommandResult {
    loop {
        let form = context.app.form().clone();
        let name: String = Input::with_theme(&context.theme)
            .with_prompt("Name")
            .with_initial_text(form.name)
            .allow_empty(true)
            .interact_text()?;
        let amount: String = Input::with_theme(&context.theme)
            .with_prompt("Amount")
            .with_initial_text(form.amount)
            .allow_empty(true)
            .interact_text()?;
        let labels: Vec<&str> = TYPE_CHOICES.iter().map(|kind| kind.as_str()).collect();
        let default = TYPE_CHOICES
            .iter()
            .position(|kind| *kind == form.kind)
            .unwrap_or(0);
        let selected = Select::with_theme(&context.theme)
            .with_prompt("Type")
            .items(&labels)
            .default(default)
            .interact()?;

        match submit(context, &name, &amount, TYPE_CHOICES[selected]) {
            Ok(()) => return Ok(()),
            Err(CommandError::Form(FormError::Invalid(err))) => {
                output_error(err);
                let retry = Confirm::with_theme(&context.theme)
                    .with_prompt("Try again?")
                    .default(true)
                    .interact()?;
                if !retry {
                    context.app.cancel_form();
                    output_info("Form closed; entered values are kept for next time.");
                    return Ok(());
                }
            }
            Err(err) => return Err(err),
        }
    }
}

fn cmd_cancel(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    if !context.app.form().is_open() {
        output_info("The transaction form is already closed.");
        return Ok(());
    }
    context.app.cancel_form();
    output_info("Transaction form closed.");
    Ok(())
}

fn cmd_form(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let form = context.app.form();
    let state = if form.is_open() { "open" } else { "closed" };
    output_info(format!("Form is {}.", state));
    output_info(format!("  Name  : {}", display_field(&form.name)));
    output_info(format!("  Amount: {}", display_field(&form.amount)));
    output_info(format!("  Type  : {}", form.kind));
    Ok(())
}

fn display_field(value: &str) -> &str {
    if value.is_empty() {
        "(empty)"
    } else {
        value
    }
}
