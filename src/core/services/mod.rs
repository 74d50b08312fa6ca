pub mod summary_service;
pub mod transaction_service;

pub use summary_service::{LedgerView, RowView, SummaryService, Tone, Totals};
pub use transaction_service::TransactionService;
