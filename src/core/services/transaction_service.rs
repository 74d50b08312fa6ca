//! Business logic helpers for recording transactions.

use tracing::info;

use crate::core::clock::IdGenerator;
use crate::domain::{Transaction, TransactionDraft};
use crate::ledger::Ledger;

pub struct TransactionService;

impl TransactionService {
    /// Assigns a fresh id to `draft`, appends it, and returns a copy of the record.
    pub fn record(
        ledger: &mut Ledger,
        ids: &mut IdGenerator,
        draft: TransactionDraft,
    ) -> Transaction {
        let transaction = draft.into_transaction(ids.next_id());
        info!(
            id = transaction.id,
            kind = %transaction.kind,
            "transaction recorded"
        );
        ledger.append(transaction.clone());
        transaction
    }
}
