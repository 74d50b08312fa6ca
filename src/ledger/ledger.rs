use tracing::{debug, warn};

use crate::{
    domain::{Transaction, TransactionType},
    errors::Result,
    storage::KeyValueStore,
};

pub const DEFAULT_STORAGE_KEY: &str = "tx";

/// Ordered list of transactions. Insertion order is display order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Ledger {
    transactions: Vec<Transaction>,
}

impl Ledger {
    pub fn new(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }

    /// The two records shown on first start.
    pub fn seeded() -> Self {
        Self::new(vec![
            Transaction::new(1, "Salary", 5000.0, TransactionType::Income),
            Transaction::new(2, "Rent", 1500.0, TransactionType::Expense),
        ])
    }

    /// Loads the persisted list stored under `key`. A missing entry, an
    /// unreadable entry, and an unparsable entry all fall back to the seed list.
    pub fn load(storage: &dyn KeyValueStore, key: &str) -> Self {
        let raw = match storage.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(key, "no persisted ledger, using seed data");
                return Self::seeded();
            }
            Err(err) => {
                warn!(key, error = %err, "failed to read persisted ledger, using seed data");
                return Self::seeded();
            }
        };
        match serde_json::from_str::<Vec<Transaction>>(&raw) {
            Ok(transactions) => {
                debug!(key, count = transactions.len(), "ledger loaded");
                Self::new(transactions)
            }
            Err(err) => {
                warn!(key, error = %err, "persisted ledger is malformed, using seed data");
                Self::seeded()
            }
        }
    }

    /// Serializes the full list under `key`.
    pub fn persist(&self, storage: &mut dyn KeyValueStore, key: &str) -> Result<()> {
        let json = serde_json::to_string(&self.transactions)?;
        storage.set(key, &json)
    }

    pub fn append(&mut self, transaction: Transaction) {
        self.transactions.push(transaction);
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn max_id(&self) -> Option<i64> {
        self.transactions.iter().map(|txn| txn.id).max()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn load_without_entry_returns_seed_list() {
        let storage = MemoryStorage::new();
        let ledger = Ledger::load(&storage, DEFAULT_STORAGE_KEY);
        assert_eq!(ledger, Ledger::seeded());
        let names: Vec<_> = ledger.transactions().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["Salary", "Rent"]);
    }

    #[test]
    fn load_with_malformed_entry_falls_back_to_seed() {
        for raw in ["not json", "null", "{\"id\":1}", "[{\"id\":1,\"name\":\"x\"}]"] {
            let storage = MemoryStorage::with_entry(DEFAULT_STORAGE_KEY, raw);
            assert_eq!(
                Ledger::load(&storage, DEFAULT_STORAGE_KEY),
                Ledger::seeded(),
                "input {raw:?} should fall back"
            );
        }
    }

    #[test]
    fn load_keeps_an_empty_persisted_list() {
        let storage = MemoryStorage::with_entry(DEFAULT_STORAGE_KEY, "[]");
        assert!(Ledger::load(&storage, DEFAULT_STORAGE_KEY).is_empty());
    }

    #[test]
    fn persist_then_load_preserves_order() {
        let mut storage = MemoryStorage::new();
        let mut ledger = Ledger::seeded();
        ledger.append(Transaction::new(3, "Bonus", 1000.0, TransactionType::Income));
        ledger.persist(&mut storage, "book").unwrap();

        let reloaded = Ledger::load(&storage, "book");
        assert_eq!(reloaded.len(), 3);
        assert_eq!(reloaded.transactions()[2].name, "Bonus");
        assert_eq!(reloaded.max_id(), Some(3));
    }
}
