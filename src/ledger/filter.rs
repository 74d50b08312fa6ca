use crate::domain::{Transaction, TypeFilter};

/// Active search text and type selector.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub search: String,
    pub kind: TypeFilter,
}

impl FilterCriteria {
    pub fn new(search: impl Into<String>, kind: TypeFilter) -> Self {
        Self {
            search: search.into(),
            kind,
        }
    }

    pub fn is_active(&self) -> bool {
        !self.search.is_empty() || self.kind != TypeFilter::All
    }

    pub fn matches(&self, transaction: &Transaction) -> bool {
        self.matches_lowered(&self.search.to_lowercase(), transaction)
    }

    /// `needle` is the search text already lower-cased.
    fn matches_lowered(&self, needle: &str, transaction: &Transaction) -> bool {
        self.kind.matches(transaction.kind) && transaction.name.to_lowercase().contains(needle)
    }
}

/// Returns the records matching `criteria`, preserving input order.
pub fn filter_transactions<'a>(
    transactions: &'a [Transaction],
    criteria: &FilterCriteria,
) -> Vec<&'a Transaction> {
    let needle = criteria.search.to_lowercase();
    transactions
        .iter()
        .filter(|txn| criteria.matches_lowered(&needle, txn))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TransactionType;

    fn sample() -> Vec<Transaction> {
        vec![
            Transaction::new(1, "Salary", 5000.0, TransactionType::Income),
            Transaction::new(2, "Rent", 1500.0, TransactionType::Expense),
            Transaction::new(3, "Side salary", 300.0, TransactionType::Income),
            Transaction::new(4, "Groceries", 80.0, TransactionType::Expense),
        ]
    }

    fn names(records: &[&Transaction]) -> Vec<String> {
        records.iter().map(|txn| txn.name.clone()).collect()
    }

    #[test]
    fn empty_criteria_returns_everything_in_order() {
        let data = sample();
        let result = filter_transactions(&data, &FilterCriteria::default());
        assert_eq!(names(&result), ["Salary", "Rent", "Side salary", "Groceries"]);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let data = sample();
        let result = filter_transactions(&data, &FilterCriteria::new("SALARY", TypeFilter::All));
        assert_eq!(names(&result), ["Salary", "Side salary"]);
        assert!(result
            .iter()
            .all(|txn| txn.name.to_lowercase().contains("salary")));
    }

    #[test]
    fn type_selector_restricts_results() {
        let data = sample();
        let result = filter_transactions(&data, &FilterCriteria::new("", TypeFilter::Expense));
        assert_eq!(names(&result), ["Rent", "Groceries"]);
        assert!(result.iter().all(|txn| txn.kind == TransactionType::Expense));
    }

    #[test]
    fn search_and_type_combine() {
        let data = sample();
        let criteria = FilterCriteria::new("r", TypeFilter::Income);
        let result = filter_transactions(&data, &criteria);
        assert_eq!(names(&result), ["Salary", "Side salary"]);
        assert!(result.iter().all(|txn| criteria.matches(txn)));
    }

    #[test]
    fn unmatched_search_yields_empty_list() {
        let data = sample();
        let result = filter_transactions(&data, &FilterCriteria::new("zzz", TypeFilter::All));
        assert!(result.is_empty());
    }

    #[test]
    fn single_record_check_agrees_with_the_list_filter() {
        let data = sample();
        let criteria = FilterCriteria::new("SAL", TypeFilter::Income);
        let kept: Vec<_> = data.iter().filter(|txn| criteria.matches(txn)).collect();
        assert_eq!(kept, filter_transactions(&data, &criteria));
        assert!(!criteria.matches(&data[1]));
    }

    #[test]
    fn is_active_tracks_either_field() {
        assert!(!FilterCriteria::default().is_active());
        assert!(FilterCriteria::new("x", TypeFilter::All).is_active());
        assert!(FilterCriteria::new("", TypeFilter::Income).is_active());
    }
}
