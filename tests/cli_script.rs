mod common;

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;

use common::{ledger_file, temp_home};

fn cli(home: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("pocket_ledger_cli").unwrap();
    cmd.env("POCKET_LEDGER_CLI_SCRIPT", "1")
        .env("POCKET_LEDGER_HOME", home)
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn startup_prints_the_seed_ledger() {
    let home = temp_home();
    cli(home.path())
        .write_stdin("exit\n")
        .assert()
        .success()
        .stdout(contains("Salary").and(contains("Balance ₹3500")));
}

#[test]
fn script_mode_adds_and_persists() {
    let home = temp_home();
    cli(home.path())
        .write_stdin("add Bonus 1000 income\nexit\n")
        .assert()
        .success()
        .stdout(contains("Added Bonus (+₹1000)").and(contains("Balance ₹4500")));

    let json = std::fs::read_to_string(ledger_file(home.path())).unwrap();
    assert!(json.contains("\"Bonus\""));

    cli(home.path())
        .write_stdin("list\n")
        .assert()
        .success()
        .stdout(contains("Bonus"));
}

#[test]
fn validation_errors_are_reported_and_the_shell_continues() {
    let home = temp_home();
    cli(home.path())
        .write_stdin("add Coffee 0 expense\ncancel\nform\n")
        .assert()
        .success()
        .stdout(
            contains("greater than zero")
                .and(contains("Transaction form closed."))
                .and(contains("Form is closed.")),
        );
}

#[test]
fn filter_shows_only_matching_rows() {
    let home = temp_home();
    cli(home.path())
        .write_stdin("filter expense\n")
        .assert()
        .success()
        .stdout(contains("Balance ₹-1500"));
}

#[test]
fn unknown_command_suggests_the_closest_match() {
    let home = temp_home();
    cli(home.path())
        .write_stdin("serch rent\n")
        .assert()
        .success()
        .stdout(contains("Did you mean `search`?"));
}

#[test]
fn help_lists_every_command() {
    let home = temp_home();
    cli(home.path())
        .write_stdin("help\n")
        .assert()
        .success()
        .stdout(contains("filter").and(contains("config")).and(contains("cancel")));
}

#[test]
fn config_change_renders_the_ledger_once() {
    let home = temp_home();
    let output = cli(home.path())
        .write_stdin("config set currency_symbol $\n")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output).unwrap();
    assert_eq!(stdout.matches("Balance").count(), 2, "startup plus one render");
    assert!(stdout.contains("Balance $3500"));
}

#[test]
fn config_change_keeps_the_open_form() {
    let home = temp_home();
    cli(home.path())
        .write_stdin("add Lunch abc expense\nconfig set show_chart off\nform\n")
        .assert()
        .success()
        .stdout(contains("Form is open.").and(contains("Amount: abc")));
}
