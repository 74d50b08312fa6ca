mod common;

use common::{controller_in, temp_home};
use pocket_ledger::{
    app::{AppError, FormError, ValidationError},
    config::{Config, TotalsScope},
    domain::{TransactionType, TypeFilter},
};

#[test]
fn seed_ledger_renders_expected_totals() {
    let home = temp_home();
    let mut app = controller_in(home.path(), &Config::default());
    let view = app.render().unwrap();

    let rows: Vec<_> = view
        .rows
        .iter()
        .map(|row| (row.name.as_str(), row.amount.as_str()))
        .collect();
    assert_eq!(rows, [("Salary", "+₹5000"), ("Rent", "-₹1500")]);
    assert_eq!(
        (view.income.as_str(), view.expense.as_str(), view.balance.as_str()),
        ("₹5000", "₹1500", "₹3500")
    );
}

#[test]
fn add_search_and_filter_flow() {
    let home = temp_home();
    let mut app = controller_in(home.path(), &Config::default());
    app.render().unwrap();

    app.open_form();
    app.fill_form("Groceries", "250.75", TransactionType::Expense);
    let (groceries, view) = app.submit_form().unwrap();
    assert_eq!(groceries.amount, 250.75);
    assert_eq!(view.expense, "₹1750.75");
    assert_eq!(view.balance, "₹3249.25");

    let view = app.set_search("gro").unwrap();
    assert_eq!(view.rows.len(), 1);
    assert_eq!(view.rows[0].amount, "-₹250.75");

    let view = app.set_type_filter(TypeFilter::Income).unwrap();
    assert!(view.rows.is_empty(), "search and type filter combine");
    assert_eq!(view.balance, "₹0");

    let view = app.clear_filters().unwrap();
    assert_eq!(view.rows.len(), 3);
}

#[test]
fn rejected_entries_never_reach_the_ledger() {
    let home = temp_home();
    let mut app = controller_in(home.path(), &Config::default());
    app.open_form();

    let cases = [
        ("", "100", ValidationError::EmptyName),
        ("Gift", "-5", ValidationError::NonPositiveAmount),
        ("Gift", "ten", ValidationError::InvalidAmount("ten".into())),
    ];
    for (name, amount, expected) in cases {
        app.fill_form(name, amount, TransactionType::Income);
        match app.submit_form() {
            Err(AppError::Form(FormError::Invalid(err))) => assert_eq!(err, expected),
            other => panic!("expected validation failure, got {other:?}"),
        }
    }
    assert_eq!(app.ledger().len(), 2);
    assert!(app.form().is_open());
}

#[test]
fn ids_stay_unique_for_rapid_submissions() {
    let home = temp_home();
    let mut app = controller_in(home.path(), &Config::default());
    let mut ids = Vec::new();
    for idx in 0..20 {
        app.open_form();
        app.fill_form(&format!("Item {idx}"), "1", TransactionType::Expense);
        ids.push(app.submit_form().unwrap().0.id);
    }
    assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn ledger_scope_reports_full_totals_while_filtering() {
    let home = temp_home();
    let config = Config {
        totals_scope: TotalsScope::Ledger,
        ..Config::default()
    };
    let mut app = controller_in(home.path(), &config);
    let view = app.set_type_filter(TypeFilter::Income).unwrap();
    assert_eq!(view.rows.len(), 1);
    assert_eq!(view.expense, "₹1500");
}

#[test]
fn custom_currency_symbol_is_used_everywhere() {
    let home = temp_home();
    let config = Config {
        currency_symbol: "€".into(),
        ..Config::default()
    };
    let mut app = controller_in(home.path(), &config);
    let view = app.render().unwrap();
    assert_eq!(view.rows[0].amount, "+€5000");
    assert_eq!(view.balance, "€3500");
}
