#![allow(dead_code)]

use std::path::{Path, PathBuf};

use pocket_ledger::{
    app::{controller_with, AppController, NullRenderer},
    chart::HiddenChart,
    config::Config,
    core::clock::SystemClock,
    storage::JsonStorage,
};
use tempfile::TempDir;

/// Creates an isolated data directory; keep the guard alive for the test.
pub fn temp_home() -> TempDir {
    TempDir::new().expect("create temp dir")
}

/// Controller over JSON storage in `base`, drawing nothing.
pub fn controller_in(base: &Path, config: &Config) -> AppController {
    let storage = JsonStorage::new(Some(base.to_path_buf())).expect("create json storage backend");
    controller_with(
        config,
        Box::new(storage),
        Box::new(NullRenderer),
        Box::new(HiddenChart::default()),
        Box::new(SystemClock),
    )
}

pub fn ledger_file(base: &Path) -> PathBuf {
    base.join("storage").join("tx.json")
}
