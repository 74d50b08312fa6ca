//! Line driver: a rustyline prompt for people, plain stdin lines for scripts.

use std::io::{self, BufRead};

use rustyline::{
    completion::{Completer, Pair},
    error::ReadlineError,
    highlight::Highlighter,
    hint::Hinter,
    history::DefaultHistory,
    validate::Validator,
    Context, Editor, Helper,
};
use tracing::debug;

use crate::cli::core::{CliError, CliMode, CommandError, LoopControl, ShellContext};
use crate::cli::output::{info as output_info, warning as output_warning};
use crate::config::CONFIG_KEYS;

/// Environment switch that reads commands from stdin without prompts.
pub const SCRIPT_ENV: &str = "POCKET_LEDGER_CLI_SCRIPT";

const TYPE_WORDS: [&str; 2] = ["income", "expense"];
const FILTER_WORDS: [&str; 3] = ["all", "income", "expense"];

pub fn run_cli() -> Result<(), CliError> {
    let mode = if std::env::var_os(SCRIPT_ENV).is_some() {
        CliMode::Script
    } else {
        CliMode::Interactive
    };

    let mut context = ShellContext::new(mode)?;
    match mode {
        CliMode::Interactive => run_interactive(&mut context),
        CliMode::Script => run_script(&mut context),
    }
}

fn run_interactive(context: &mut ShellContext) -> Result<(), CliError> {
    let mut editor = Editor::<LedgerCompleter, DefaultHistory>::new()?;
    editor.set_helper(Some(LedgerCompleter::new(context.command_names())));

    while context.running {
        match editor.readline(&context.prompt()) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                let _ = editor.add_history_entry(line);
                run_line(context, line);
            }
            Err(ReadlineError::Interrupted) => {
                if context.confirm_exit()? {
                    break;
                }
            }
            Err(ReadlineError::Eof) => {
                output_info("Goodbye.");
                break;
            }
            Err(err) => return Err(err.into()),
        }
    }
    Ok(())
}

fn run_script(context: &mut ShellContext) -> Result<(), CliError> {
    for line in io::stdin().lock().lines() {
        run_line(context, &line?);
        if !context.running {
            break;
        }
    }
    Ok(())
}

/// Failed commands are reported; the session always continues.
fn run_line(context: &mut ShellContext, line: &str) {
    if let Err(err) = handle_line(context, line) {
        context.report_error(err);
    }
}

pub(crate) fn handle_line(
    context: &mut ShellContext,
    line: &str,
) -> Result<LoopControl, CommandError> {
    let tokens = match shell_words::split(line) {
        Ok(tokens) => tokens,
        Err(err) => {
            output_warning(format!("Could not parse input: {err}"));
            return Ok(LoopControl::Continue);
        }
    };
    let Some((raw, rest)) = tokens.split_first() else {
        return Ok(LoopControl::Continue);
    };

    let command = raw.to_lowercase();
    let args: Vec<&str> = rest.iter().map(String::as_str).collect();
    debug!(command = %command, args = args.len(), "dispatching command");

    let control = context.dispatch(&command, raw, &args)?;
    if control == LoopControl::Exit {
        context.running = false;
    }
    Ok(control)
}

/// Tab completion for command names and the fixed words some commands take.
struct LedgerCompleter {
    commands: Vec<&'static str>,
}

impl LedgerCompleter {
    fn new(mut commands: Vec<&'static str>) -> Self {
        commands.sort_unstable();
        Self { commands }
    }

    /// Words that may follow the complete tokens in `previous`.
    fn vocabulary(&self, previous: &[&str]) -> Vec<&'static str> {
        match previous {
            [] | ["help"] => self.commands.clone(),
            ["filter"] => FILTER_WORDS.to_vec(),
            ["add", _, _] => TYPE_WORDS.to_vec(),
            ["config"] => vec!["show", "set"],
            ["config", "set"] => CONFIG_KEYS.to_vec(),
            ["config", "set", "show_chart"] => vec!["on", "off"],
            ["config", "set", "totals_scope"] => vec!["visible", "ledger"],
            _ => Vec::new(),
        }
    }

    /// Start of the word under the cursor and its possible completions.
    fn candidates(&self, line: &str, pos: usize) -> (usize, Vec<String>) {
        let head = &line[..pos];
        let start = head
            .char_indices()
            .rev()
            .find(|(_, c)| c.is_whitespace())
            .map_or(0, |(idx, c)| idx + c.len_utf8());
        let previous: Vec<String> = head[..start]
            .split_whitespace()
            .map(str::to_lowercase)
            .collect();
        let previous: Vec<&str> = previous.iter().map(String::as_str).collect();
        let needle = head[start..].to_lowercase();

        let words = self
            .vocabulary(&previous)
            .into_iter()
            .filter(|word| word.starts_with(&needle))
            .map(str::to_string)
            .collect();
        (start, words)
    }
}

impl Completer for LedgerCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let (start, words) = self.candidates(line, pos);
        let pairs = words
            .into_iter()
            .map(|word| Pair {
                display: word.clone(),
                replacement: word,
            })
            .collect();
        Ok((start, pairs))
    }
}

impl Hinter for LedgerCompleter {
    type Hint = String;
}

impl Highlighter for LedgerCompleter {}

impl Validator for LedgerCompleter {}

impl Helper for LedgerCompleter {}
