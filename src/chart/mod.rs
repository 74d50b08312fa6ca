//! Income/expense chart adapter over an injected drawing backend.
//!
//! The adapter keeps at most one live chart. Every update tears the previous
//! chart down and builds a new one from scratch.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::services::Totals;
use crate::errors::Result;

pub const INCOME_LABEL: &str = "Income";
pub const EXPENSE_LABEL: &str = "Expense";

/// Segment colors as `#rrggbb` strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartTheme {
    pub income_color: String,
    pub expense_color: String,
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            income_color: "#4f8cff".into(),
            expense_color: "#ff5f5f".into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Doughnut,
}

/// Backend-neutral description of the chart to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    pub kind: ChartKind,
    pub labels: [&'static str; 2],
    pub values: [f64; 2],
    pub colors: [String; 2],
}

impl ChartConfig {
    pub fn doughnut(totals: Totals, theme: &ChartTheme) -> Self {
        Self {
            kind: ChartKind::Doughnut,
            labels: [INCOME_LABEL, EXPENSE_LABEL],
            values: [totals.income, totals.expense],
            colors: [theme.income_color.clone(), theme.expense_color.clone()],
        }
    }

    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }
}

/// Opaque handle to a chart instance created by a backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChartHandle(pub u64);

/// Drawing collaborator. `render` creates a chart, `dispose` destroys it.
pub trait ChartBackend {
    fn render(&mut self, config: &ChartConfig) -> Result<ChartHandle>;
    fn dispose(&mut self, handle: ChartHandle);
}

pub struct ChartAdapter {
    backend: Box<dyn ChartBackend>,
    theme: ChartTheme,
    current: Option<ChartHandle>,
}

impl ChartAdapter {
    pub fn new(backend: Box<dyn ChartBackend>, theme: ChartTheme) -> Self {
        Self {
            backend,
            theme,
            current: None,
        }
    }

    /// Disposes the previous chart (if any) and draws a new one for `totals`.
    pub fn update(&mut self, totals: Totals) -> Result<ChartHandle> {
        self.dispose();
        let config = ChartConfig::doughnut(totals, &self.theme);
        let handle = self.backend.render(&config)?;
        debug!(
            handle = handle.0,
            income = totals.income,
            expense = totals.expense,
            "chart rebuilt"
        );
        self.current = Some(handle);
        Ok(handle)
    }

    /// Destroys the live chart; a no-op when there is none.
    pub fn dispose(&mut self) {
        if let Some(handle) = self.current.take() {
            self.backend.dispose(handle);
        }
    }

    pub fn current(&self) -> Option<ChartHandle> {
        self.current
    }
}

impl Drop for ChartAdapter {
    fn drop(&mut self) {
        self.dispose();
    }
}

/// Backend that hands out handles without drawing anything.
#[derive(Debug, Default)]
pub struct HiddenChart {
    next: u64,
}

impl ChartBackend for HiddenChart {
    fn render(&mut self, _config: &ChartConfig) -> Result<ChartHandle> {
        self.next += 1;
        Ok(ChartHandle(self.next))
    }

    fn dispose(&mut self, _handle: ChartHandle) {}
}
