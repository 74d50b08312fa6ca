//! Shell context, dispatch, and error reporting.

use std::{io, path::PathBuf};

use dialoguer::theme::ColorfulTheme;
use strsim::levenshtein;
use thiserror::Error;

use crate::{
    app::{controller_with, AppController, AppError, FormError},
    chart::{ChartBackend, HiddenChart},
    config::{Config, ConfigManager},
    core::{clock::SystemClock, services::LedgerView, utils::PathResolver},
    errors::LedgerError,
    storage::JsonStorage,
};

use super::commands;
use super::output;
use super::registry::{CommandEntry, CommandRegistry};
use super::ui::{style::detect_plain_mode, TerminalChart, TerminalRenderer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

/// Fatal shell errors that end the session.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] LedgerError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error(transparent)]
    Command(#[from] CommandError),
}

/// Per-command failures; reported and the loop continues.
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Form(#[from] FormError),
    #[error(transparent)]
    Core(#[from] LedgerError),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error("exit requested")]
    ExitRequested,
}

impl From<AppError> for CommandError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::Form(err) => CommandError::Form(err),
            AppError::Ledger(err) => CommandError::Core(err),
        }
    }
}

pub type CommandResult = Result<(), CommandError>;

pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub app: AppController,
    pub theme: ColorfulTheme,
    pub config: Config,
    pub config_manager: ConfigManager,
    pub base_dir: PathBuf,
    pub last_view: Option<LedgerView>,
    pub running: bool,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        Self::with_base_dir(mode, PathResolver::base_dir())
    }

    /// Builds the shell against `base` and renders the full ledger once.
    pub fn with_base_dir(mode: CliMode, base: PathBuf) -> Result<Self, CliError> {
        output::set_preferences(output::OutputPreferences {
            plain_mode: detect_plain_mode(),
        });

        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);

        let config_manager = ConfigManager::with_base_dir(base.clone())?;
        let config = config_manager.load()?;
        let app = build_app(&config, &base)?;

        let mut context = ShellContext {
            mode,
            registry,
            app,
            theme: ColorfulTheme::default(),
            config,
            config_manager,
            base_dir: base,
            last_view: None,
            running: true,
        };
        context.refresh_full()?;
        Ok(context)
    }

    pub fn mode(&self) -> CliMode {
        self.mode
    }

    pub(crate) fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub(crate) fn command(&self, name: &str) -> Option<&CommandEntry> {
        self.registry.get(name)
    }

    /// Prompt showing the active filter, e.g. `ledger [expense "rent"]> `.
    pub(crate) fn prompt(&self) -> String {
        let criteria = self.app.criteria();
        if !criteria.is_active() {
            return "ledger> ".to_string();
        }
        let mut parts = vec![criteria.kind.to_string()];
        if !criteria.search.is_empty() {
            parts.push(format!("\"{}\"", criteria.search));
        }
        format!("ledger [{}]> ", parts.join(" "))
    }

    pub(crate) fn refresh_full(&mut self) -> CommandResult {
        let view = self.app.render()?;
        self.last_view = Some(view);
        Ok(())
    }

    pub(crate) fn remember(&mut self, view: LedgerView) {
        self.last_view = Some(view);
    }

    /// Replaces the controller after a configuration change, keeping the
    /// active filter and the form, then renders once. The ledger is reloaded
    /// from storage, which every render keeps current.
    pub(crate) fn rebuild_app(&mut self) -> CommandResult {
        let criteria = self.app.criteria().clone();
        let form = self.app.form().clone();
        self.app = build_app(&self.config, &self.base_dir)?;
        self.app.resume(criteria, form);
        let view = self.app.apply_filters()?;
        self.last_view = Some(view);
        Ok(())
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        if let Some(handler) = self.registry.handler(command) {
            match handler(self, args) {
                Ok(()) => Ok(LoopControl::Continue),
                Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
                Err(err) => Err(err),
            }
        } else {
            self.suggest_command(raw);
            Ok(LoopControl::Continue)
        }
    }

    #[cfg(test)]
    pub(crate) fn process_line(&mut self, line: &str) -> Result<LoopControl, CommandError> {
        super::shell::handle_line(self, line)
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        output::warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));

        let best = self
            .registry
            .names()
            .map(|key| (levenshtein(key, &input.to_lowercase()), key))
            .min_by_key(|(distance, _)| *distance);

        if let Some((distance, best)) = best {
            if distance <= 3 {
                output::hint(format!("Did you mean `{}`?", best));
            }
        }
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        Ok(dialoguer::Confirm::with_theme(&self.theme)
            .with_prompt("Exit shell?")
            .default(true)
            .interact()?)
    }

    pub(crate) fn report_error(&self, err: CommandError) {
        match err {
            CommandError::ExitRequested => {}
            CommandError::InvalidArguments(message) => {
                output::error(message);
                output::hint("Use `help <command>` for usage details.");
            }
            CommandError::Form(FormError::Invalid(err)) => {
                output::error(err);
                output::hint(
                    "The form is still open: run `add <name> <amount> <type>` again or `cancel`.",
                );
            }
            other => output::error(other),
        }
    }
}

fn build_app(config: &Config, base: &std::path::Path) -> Result<AppController, LedgerError> {
    let storage = JsonStorage::new(Some(base.to_path_buf()))?;
    let chart: Box<dyn ChartBackend> = if config.show_chart {
        Box::new(TerminalChart::new())
    } else {
        Box::new(HiddenChart::default())
    };
    Ok(controller_with(
        config,
        Box::new(storage),
        Box::new(TerminalRenderer),
        chart,
        Box::new(SystemClock),
    ))
}
