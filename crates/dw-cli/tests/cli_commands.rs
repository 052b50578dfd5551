//! Integration tests for the dw CLI commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use assert_cmd::Command;
use predicates::prelude::*;

fn darkwood() -> Command {
    let mut cmd = Command::cargo_bin("darkwood").unwrap();
    cmd.arg("--plain").env_remove("RUST_LOG");
    cmd
}

// -- help / version --

#[test]
fn help_lists_options() {
    Command::cargo_bin("darkwood")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--seed"))
        .stdout(predicate::str::contains("--mode"))
        .stdout(predicate::str::contains("--plain"))
        .stdout(predicate::str::contains("--verbose"));
}

#[test]
fn version_flag() {
    Command::cargo_bin("darkwood")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("darkwood"));
}

// -- argument errors --

#[test]
fn unknown_mode_rejected() {
    darkwood()
        .args(["--mode", "sideways"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown combat mode"));
}

#[test]
fn non_numeric_seed_rejected() {
    darkwood().args(["--seed", "abc"]).assert().failure();
}

// -- play --

#[test]
fn closed_input_exits_cleanly() {
    darkwood()
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("You come to on the floor"))
        .stdout(predicate::str::contains("Enter attack power:"));
}

#[test]
fn setup_reports_stats() {
    darkwood()
        .write_stdin("12\n30\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Your stats: HP 100/100, ATK 12, AC 20"))
        .stdout(predicate::str::contains("Where do you go from here?"));
}

#[test]
fn invalid_answers_reprompt() {
    darkwood()
        .write_stdin("strong\n10\n10\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("invalid number 'strong'"))
        .stdout(predicate::str::contains("pick a number from 1 to 4"));
}

#[test]
fn accept_elder_quest() {
    darkwood()
        .write_stdin("10\n10\n2\n1\ny\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Will you look for the magical sword? (Y/N):"))
        .stdout(predicate::str::contains("Quest accepted"));
}

#[test]
fn stay_put_loops_to_menu() {
    darkwood()
        .write_stdin("10\n10\n3\n4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("You stay put"))
        .stdout(predicate::str::contains("Your pack is empty."));
}

#[test]
fn preset_mode_fights_without_asking() {
    darkwood()
        .args(["--seed", "7", "--mode", "auto"])
        .write_stdin("15\n15\n1\n2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("(Fighting in automatic mode.)"))
        .stdout(predicate::str::contains("Dice roll:"))
        .stdout(predicate::str::contains("(A/M)").not());
}

#[test]
fn seeded_runs_match() {
    let run = || {
        darkwood()
            .args(["--seed", "42", "--mode", "a"])
            .write_stdin("10\n10\n1\n2\n2\n")
            .output()
            .unwrap()
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn verbose_logs_to_stderr() {
    darkwood()
        .args(["-vv", "--seed", "1"])
        .write_stdin("10\n10\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("player configured"));
}
