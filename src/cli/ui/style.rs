use std::io::IsTerminal;

use colored::{Color, Colorize};

use crate::cli::output::current_preferences;

#[derive(Clone)]
pub struct UiStyle {
    pub header_prefix: String,
    pub horizontal: char,
    pub use_color: bool,
    pub color_header: Option<Color>,
    pub plain_mode: bool,
}

impl UiStyle {
    pub fn detect() -> Self {
        let prefs = current_preferences();
        let plain_mode = prefs.plain_mode;
        let use_color = !plain_mode;

        Self {
            header_prefix: if plain_mode { "> ".into() } else { "⮞ ".into() },
            horizontal: if plain_mode { '-' } else { '─' },
            use_color,
            color_header: if use_color {
                Some(Color::BrightBlue)
            } else {
                None
            },
            plain_mode,
        }
    }

    pub fn horizontal_line(&self, width: usize) -> String {
        self.horizontal.to_string().repeat(width.max(24))
    }

    pub fn apply_header_style(&self, text: &str) -> String {
        if self.use_color {
            match self.color_header {
                Some(color) => text.color(color).bold().to_string(),
                None => text.bold().to_string(),
            }
        } else {
            text.to_string()
        }
    }

    pub fn apply_color(&self, text: &str, color: Option<Color>) -> String {
        match (self.use_color, color) {
            (true, Some(color)) => text.color(color).to_string(),
            _ => text.to_string(),
        }
    }
}

/// Plain output when stdout is not a terminal or `NO_COLOR` is set.
pub fn detect_plain_mode() -> bool {
    !std::io::stdout().is_terminal() || std::env::var_os("NO_COLOR").is_some()
}
