use std::{
    fmt, fs,
    path::{Path, PathBuf},
    str::FromStr,
};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    chart::ChartTheme,
    core::utils::{ensure_dir, write_atomic, PathResolver},
    currency::DEFAULT_CURRENCY_SYMBOL,
    errors::LedgerError,
    ledger::DEFAULT_STORAGE_KEY,
};

/// Which transactions feed the aggregate labels and the chart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TotalsScope {
    /// Totals follow the rows currently displayed (filtered).
    #[default]
    Visible,
    /// Totals always cover the whole ledger.
    Ledger,
}

impl fmt::Display for TotalsScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TotalsScope::Visible => "visible",
            TotalsScope::Ledger => "ledger",
        })
    }
}

impl FromStr for TotalsScope {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "visible" => Ok(TotalsScope::Visible),
            "ledger" => Ok(TotalsScope::Ledger),
            other => Err(format!(
                "unknown totals scope `{}` (expected visible or ledger)",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub currency_symbol: String,
    pub storage_key: String,
    pub totals_scope: TotalsScope,
    pub show_chart: bool,
    pub chart: ChartTheme,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.into(),
            storage_key: DEFAULT_STORAGE_KEY.into(),
            totals_scope: TotalsScope::default(),
            show_chart: true,
            chart: ChartTheme::default(),
        }
    }
}

pub const CONFIG_KEYS: &[&str] = &[
    "currency_symbol",
    "storage_key",
    "totals_scope",
    "show_chart",
    "chart.income_color",
    "chart.expense_color",
];

impl Config {
    /// Key/value pairs in display order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("currency_symbol", self.currency_symbol.clone()),
            ("storage_key", self.storage_key.clone()),
            ("totals_scope", self.totals_scope.to_string()),
            ("show_chart", self.show_chart.to_string()),
            ("chart.income_color", self.chart.income_color.clone()),
            ("chart.expense_color", self.chart.expense_color.clone()),
        ]
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<(), LedgerError> {
        let value = value.trim();
        match key {
            "currency_symbol" => self.currency_symbol = value.to_string(),
            "storage_key" => {
                if value.is_empty() {
                    return Err(LedgerError::ConfigError("storage_key cannot be empty".into()));
                }
                self.storage_key = value.to_string();
            }
            "totals_scope" => {
                self.totals_scope = value.parse().map_err(LedgerError::ConfigError)?;
            }
            "show_chart" => {
                self.show_chart = parse_flag(value)
                    .ok_or_else(|| LedgerError::ConfigError(format!("`{}` is not on/off", value)))?;
            }
            "chart.income_color" => self.chart.income_color = parse_color(value)?,
            "chart.expense_color" => self.chart.expense_color = parse_color(value)?,
            other => {
                return Err(LedgerError::ConfigError(format!(
                    "unknown setting `{}` (expected one of: {})",
                    other,
                    CONFIG_KEYS.join(", ")
                )))
            }
        }
        Ok(())
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Some(true),
        "off" | "false" | "no" | "0" => Some(false),
        _ => None,
    }
}

fn parse_color(value: &str) -> Result<String, LedgerError> {
    let digits = value.strip_prefix('#').unwrap_or("");
    if digits.len() == 6 && digits.chars().all(|c| c.is_ascii_hexdigit()) {
        Ok(value.to_ascii_lowercase())
    } else {
        Err(LedgerError::ConfigError(format!(
            "`{}` is not a #rrggbb color",
            value
        )))
    }
}

/// Reads and writes `config.json` in the data directory.
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn with_base_dir(base: PathBuf) -> Result<Self, LedgerError> {
        ensure_dir(&base)?;
        Ok(Self {
            path: PathResolver::config_file_in(&base),
        })
    }

    /// Returns defaults when no configuration file exists yet.
    pub fn load(&self) -> Result<Config, LedgerError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            serde_json::from_str(&data).map_err(|err| {
                LedgerError::ConfigError(format!("{}: {}", self.path.display(), err))
            })
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<(), LedgerError> {
        let json = serde_json::to_string_pretty(config)?;
        write_atomic(&self.path, &json)?;
        info!(path = %self.path.display(), "configuration saved");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
