use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use tracing::debug;

use super::KeyValueStore;
use crate::{
    core::utils::{ensure_dir, write_atomic, PathResolver},
    errors::Result,
};

const ENTRY_EXTENSION: &str = "json";

/// File-backed key-value store: one `<key>.json` file per key.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    root: PathBuf,
}

impl JsonStorage {
    /// Opens (creating if needed) the storage directory below `base`, or below
    /// the default data directory when `base` is `None`.
    pub fn new(base: Option<PathBuf>) -> Result<Self> {
        let base = PathResolver::resolve_base(base);
        let root = PathResolver::storage_dir_in(&base);
        ensure_dir(&root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn entry_path(&self, key: &str) -> PathBuf {
        self.root
            .join(format!("{}.{}", canonical_key(key), ENTRY_EXTENSION))
    }
}

impl KeyValueStore for JsonStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.entry_path(key);
        match fs::read_to_string(&path) {
            Ok(data) => Ok(Some(data)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.entry_path(key);
        write_atomic(&path, value)?;
        debug!(path = %path.display(), bytes = value.len(), "storage entry written");
        Ok(())
    }
}

fn canonical_key(key: &str) -> String {
    let sanitized: String = key
        .trim()
        .chars()
        .map(|c| match c {
            'a'..='z' | 'A'..='Z' | '0'..='9' | '-' | '_' => c,
            _ => '_',
        })
        .collect();
    if sanitized.trim_matches('_').is_empty() {
        "entry".into()
    } else {
        sanitized
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn storage_with_temp_dir() -> (JsonStorage, TempDir) {
        let temp = TempDir::new().expect("temp dir");
        let storage = JsonStorage::new(Some(temp.path().to_path_buf())).expect("json storage");
        (storage, temp)
    }

    #[test]
    fn missing_key_reads_as_none() {
        let (storage, _guard) = storage_with_temp_dir();
        assert_eq!(storage.get("tx").unwrap(), None);
    }

    #[test]
    fn set_then_get_returns_written_value() {
        let (mut storage, _guard) = storage_with_temp_dir();
        storage.set("tx", "[]").unwrap();
        assert_eq!(storage.get("tx").unwrap().as_deref(), Some("[]"));
        assert!(storage.entry_path("tx").ends_with("storage/tx.json"));
    }

    #[test]
    fn keys_are_sanitized_into_file_names() {
        let (storage, _guard) = storage_with_temp_dir();
        let path = storage.entry_path("../escape me");
        assert_eq!(path.parent(), Some(storage.root()));
        assert_eq!(
            path.file_name().and_then(|name| name.to_str()),
            Some("___escape_me.json")
        );
        assert!(storage.entry_path("///").ends_with("entry.json"));
    }
}
