use colored::Color;

use crate::app::LedgerRenderer;
use crate::cli::ui::style::UiStyle;
use crate::cli::ui::table::{Table, TableColumn};
use crate::core::services::{LedgerView, Tone};
use crate::errors::LedgerError;

/// Prints each view as a transaction table followed by the aggregate line.
#[derive(Debug, Default)]
pub struct TerminalRenderer;

impl TerminalRenderer {
    pub fn lines(view: &LedgerView, style: &UiStyle) -> Vec<String> {
        let mut table = Table::new(
            Some("Transactions"),
            vec![TableColumn::new("Name", 12), TableColumn::new("Amount", 10).right()],
        );
        table.empty_message = "No transactions match.".into();
        for row in &view.rows {
            let accent = match row.tone {
                Tone::Positive => Color::Green,
                Tone::Negative => Color::Red,
            };
            table.add_row(vec![row.name.as_str(), row.amount.as_str()], Some(accent));
        }
        table.fit_columns();

        let mut lines = table.render_lines(style);
        lines.push(format!(
            "Income {}  Expense {}  Balance {}",
            style.apply_color(&view.income, Some(Color::Green)),
            style.apply_color(&view.expense, Some(Color::Red)),
            style.apply_header_style(&view.balance),
        ));
        lines
    }
}

impl LedgerRenderer for TerminalRenderer {
    fn render(&mut self, view: &LedgerView) -> Result<(), LedgerError> {
        let style = UiStyle::detect();
        println!();
        for line in Self::lines(view, &style) {
            println!("{}", line);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency::CurrencyFormatter;
    use crate::ledger::Ledger;

    #[test]
    fn seed_view_renders_rows_and_totals() {
        let ledger = Ledger::seeded();
        let records: Vec<_> = ledger.transactions().iter().collect();
        let view = LedgerView::from_records(&records, &CurrencyFormatter::default());
        let style = UiStyle {
            header_prefix: String::new(),
            horizontal: '-',
            use_color: false,
            color_header: None,
            plain_mode: true,
        };

        let lines = TerminalRenderer::lines(&view, &style);
        assert!(lines.iter().any(|line| line.starts_with("Salary") && line.ends_with("+₹5000")));
        assert!(lines.iter().any(|line| line.starts_with("Rent") && line.ends_with("-₹1500")));
        assert_eq!(
            lines.last().map(String::as_str),
            Some("Income ₹5000  Expense ₹1500  Balance ₹3500")
        );
    }
}
