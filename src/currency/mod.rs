//! Currency-prefixed amount rendering.

use crate::domain::TransactionType;

pub const DEFAULT_CURRENCY_SYMBOL: &str = "₹";

/// Renders amounts as `<symbol><number>` using the shortest decimal form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyFormatter {
    symbol: String,
}

impl Default for CurrencyFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_CURRENCY_SYMBOL)
    }
}

impl CurrencyFormatter {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// `₹5000`, `₹12.5`, `₹-500`.
    pub fn format(&self, amount: f64) -> String {
        format!("{}{}", self.symbol, format_number(amount))
    }

    /// `+₹5000` for income, `-₹1500` for expense.
    pub fn format_signed(&self, kind: TransactionType, amount: f64) -> String {
        format!("{}{}", kind.sign(), self.format(amount))
    }
}

/// Shortest round-trip decimal rendering; integral values carry no fraction.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        // folds -0.0 into 0
        return "0".to_string();
    }
    format!("{}", value)
}
