//! Projection of transactions into a renderable view model.

use serde::Serialize;

use crate::currency::CurrencyFormatter;
use crate::domain::{Transaction, TransactionType};

/// Summed income and expense of a set of transactions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Totals {
    pub income: f64,
    pub expense: f64,
}

impl Totals {
    pub fn from_transactions<'a, I>(transactions: I) -> Self
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        transactions
            .into_iter()
            .fold(Totals::default(), |mut totals, txn| {
                match txn.kind {
                    TransactionType::Income => totals.income += txn.amount,
                    TransactionType::Expense => totals.expense += txn.amount,
                }
                totals
            })
    }

    pub fn balance(&self) -> f64 {
        self.income - self.expense
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Tone {
    Positive,
    Negative,
}

/// One displayed ledger row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowView {
    pub id: i64,
    pub name: String,
    pub amount: String,
    pub tone: Tone,
}

/// Everything a rendering backend needs: rows plus the three aggregate labels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LedgerView {
    pub rows: Vec<RowView>,
    pub totals: Totals,
    pub income: String,
    pub expense: String,
    pub balance: String,
}

impl LedgerView {
    /// Rows come from `records`; the aggregates from `totals`.
    pub fn project<'a, I>(records: I, totals: Totals, formatter: &CurrencyFormatter) -> Self
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        let rows = records
            .into_iter()
            .map(|txn| RowView {
                id: txn.id,
                name: txn.name.clone(),
                amount: formatter.format_signed(txn.kind, txn.amount),
                tone: if txn.is_income() {
                    Tone::Positive
                } else {
                    Tone::Negative
                },
            })
            .collect();
        Self {
            rows,
            totals,
            income: formatter.format(totals.income),
            expense: formatter.format(totals.expense),
            balance: formatter.format(totals.balance()),
        }
    }

    /// Rows and aggregates both computed from `records`.
    pub fn from_records(records: &[&Transaction], formatter: &CurrencyFormatter) -> Self {
        let totals = Totals::from_transactions(records.iter().copied());
        Self::project(records.iter().copied(), totals, formatter)
    }
}

pub struct SummaryService;

impl SummaryService {
    pub fn totals(transactions: &[Transaction]) -> Totals {
        Totals::from_transactions(transactions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::Ledger;

    #[test]
    fn seed_ledger_projects_expected_labels() {
        let ledger = Ledger::seeded();
        let records: Vec<_> = ledger.transactions().iter().collect();
        let view = LedgerView::from_records(&records, &CurrencyFormatter::default());

        assert_eq!(view.income, "₹5000");
        assert_eq!(view.expense, "₹1500");
        assert_eq!(view.balance, "₹3500");
        assert_eq!(view.rows[0].amount, "+₹5000");
        assert_eq!(view.rows[0].tone, Tone::Positive);
        assert_eq!(view.rows[1].amount, "-₹1500");
        assert_eq!(view.rows[1].tone, Tone::Negative);
    }

    #[test]
    fn empty_list_shows_zero_everywhere() {
        let view = LedgerView::from_records(&[], &CurrencyFormatter::default());
        assert!(view.rows.is_empty());
        assert_eq!(
            (view.income.as_str(), view.expense.as_str(), view.balance.as_str()),
            ("₹0", "₹0", "₹0")
        );
    }

    #[test]
    fn balance_is_income_minus_expense() {
        let data = vec![
            Transaction::new(1, "A", 120.5, TransactionType::Income),
            Transaction::new(2, "B", 300.0, TransactionType::Expense),
            Transaction::new(3, "C", 79.5, TransactionType::Income),
        ];
        let totals = SummaryService::totals(&data);
        assert_eq!(totals.income, 200.0);
        assert_eq!(totals.expense, 300.0);
        assert_eq!(totals.balance(), totals.income - totals.expense);

        let records: Vec<_> = data.iter().collect();
        let view = LedgerView::from_records(&records, &CurrencyFormatter::default());
        assert_eq!(view.balance, "₹-100");
    }

    #[test]
    fn project_uses_supplied_totals_for_labels() {
        let ledger = Ledger::seeded();
        let full = SummaryService::totals(ledger.transactions());
        let rent: Vec<_> = ledger
            .transactions()
            .iter()
            .filter(|txn| txn.name == "Rent")
            .collect();
        let view = LedgerView::project(rent, full, &CurrencyFormatter::default());
        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.balance, "₹3500");
    }
}
