#![doc(test(attr(deny(warnings))))]

//! Pocket Ledger keeps a list of income and expense transactions, derives
//! totals and a balance, and renders them through pluggable table and chart
//! backends. The `cli` module wraps it in an interactive shell.

pub mod app;
pub mod chart;
pub mod cli;
pub mod config;
pub mod core;
pub mod currency;
pub mod domain;
pub mod errors;
pub mod ledger;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Pocket Ledger tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
