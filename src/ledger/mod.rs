pub mod filter;
pub mod ledger;

pub use crate::domain::{Transaction, TransactionType, TypeFilter};
pub use filter::{filter_transactions, FilterCriteria};
pub use ledger::{Ledger, DEFAULT_STORAGE_KEY};
