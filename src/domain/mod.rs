pub mod transaction;

pub use transaction::{Transaction, TransactionDraft, TransactionType, TypeFilter};
