// CLI surface smoke tests. Everything here must pass without a data
// service: help output, offline transition validation, and init.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_lists_the_console_commands() {
    Command::cargo_bin("copydesk")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("set-status"))
        .stdout(predicate::str::contains("workers"));
}

#[test]
fn no_subcommand_prints_usage_hints() {
    Command::cargo_bin("copydesk")
        .unwrap()
        .assert()
        .success()
        .stdout(predicate::str::contains("copydesk list"));
}

#[test]
fn illegal_transition_is_rejected_before_any_network_call() {
    // draft -> draft is not in the table; the command must fail fast and
    // name the legal exits.
    Command::cargo_bin("copydesk")
        .unwrap()
        .args(["set-status", "1", "draft", "draft"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("illegal transition"))
        .stderr(predicate::str::contains("publish"));
}

#[test]
fn unknown_status_token_is_rejected() {
    Command::cargo_bin("copydesk")
        .unwrap()
        .args(["set-status", "1", "draught", "publish"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown status token"));
}

#[test]
fn init_writes_a_config_file() {
    let dir = tempfile::tempdir().unwrap();

    Command::cargo_bin("copydesk")
        .unwrap()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("copydesk.toml"));

    let written = std::fs::read_to_string(dir.path().join("copydesk.toml")).unwrap();
    assert!(written.contains("base_url"));

    // A second init without --force must refuse to overwrite.
    Command::cargo_bin("copydesk")
        .unwrap()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));
}
