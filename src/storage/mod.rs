//! Key-value persistence used by the ledger store.

pub mod json_backend;
pub mod memory;

use crate::errors::Result;

/// Durable string-keyed storage holding serialized values.
pub trait KeyValueStore {
    /// Returns the stored value, or `None` when the key has never been written.
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

pub use json_backend::JsonStorage;
pub use memory::MemoryStorage;
