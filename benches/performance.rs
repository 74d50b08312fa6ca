use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pocket_ledger::core::services::{LedgerView, SummaryService};
use pocket_ledger::currency::CurrencyFormatter;
use pocket_ledger::domain::{Transaction, TransactionType, TypeFilter};
use pocket_ledger::ledger::{filter_transactions, FilterCriteria, Ledger};
use pocket_ledger::storage::{JsonStorage, KeyValueStore};
use tempfile::tempdir;

fn build_sample_ledger(txn_count: usize) -> Ledger {
    let transactions = (0..txn_count)
        .map(|idx| {
            let kind = if idx % 4 == 0 {
                TransactionType::Income
            } else {
                TransactionType::Expense
            };
            Transaction::new(
                idx as i64 + 1,
                format!("Entry {idx}"),
                50.0 + (idx % 100) as f64,
                kind,
            )
        })
        .collect();
    Ledger::new(transactions)
}

fn bench_ledger_io(c: &mut Criterion) {
    let ledger = build_sample_ledger(black_box(10_000));
    let dir = tempdir().expect("tempdir");
    let mut storage = JsonStorage::new(Some(dir.path().to_path_buf())).expect("storage");

    c.bench_function("ledger_persist_10k", |b| {
        b.iter(|| {
            ledger.persist(&mut storage, "tx").expect("persist ledger");
        })
    });

    ledger.persist(&mut storage, "tx").expect("seed");

    c.bench_function("ledger_load_10k", |b| {
        b.iter(|| {
            let loaded = Ledger::load(&storage, "tx");
            black_box(loaded);
        })
    });

    black_box(storage.get("tx").expect("read back"));
}

fn bench_projection(c: &mut Criterion) {
    let ledger = build_sample_ledger(black_box(10_000));
    let formatter = CurrencyFormatter::default();
    let criteria = FilterCriteria::new("entry 1", TypeFilter::Expense);

    c.bench_function("filter_10k", |b| {
        b.iter(|| black_box(filter_transactions(ledger.transactions(), &criteria)))
    });

    c.bench_function("project_full_10k", |b| {
        b.iter(|| {
            let totals = SummaryService::totals(ledger.transactions());
            black_box(LedgerView::project(ledger.transactions(), totals, &formatter))
        })
    });
}

criterion_group!(benches, bench_ledger_io, bench_projection);
criterion_main!(benches);
