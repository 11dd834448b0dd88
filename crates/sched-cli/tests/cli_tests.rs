//! Integration tests for the `wpi-sched` CLI binary.
//!
//! These tests use `assert_cmd` and `predicates` to run the actual binary
//! against workbook fixtures, covering stdout and file output, configuration
//! flags, and error exits.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper: path to a workbook fixture.
fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

fn wpi_sched() -> Command {
    Command::cargo_bin("wpi-sched").unwrap()
}

// ─────────────────────────────────────────────────────────────────────────────
// Successful conversion
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn converts_to_stdout_by_default() {
    wpi_sched()
        .args(["-f", fixture("schedule.xlsx").as_str()])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "BEGIN:VCALENDAR\nVERSION:2.0\nCALSCALE:GREGORIAN\n",
        ))
        .stdout(predicate::str::ends_with("END:VCALENDAR\n"))
        .stdout(predicate::str::contains(
            "RRULE:FREQ=WEEKLY;BYDAY=MO,WE,FR;UNTIL=20250502T235959",
        ))
        .stdout(predicate::str::contains(
            "DTSTART;TZID=America/New_York:20250107T140000",
        ))
        .stdout(predicate::str::contains("Global Projects").not());
}

#[test]
fn dash_output_means_stdout() {
    wpi_sched()
        .args(["-f", fixture("schedule.xlsx").as_str(), "-o", "-"])
        .assert()
        .success()
        .stdout(predicate::str::contains("BEGIN:VEVENT"));
}

#[test]
fn writes_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("schedule.ics");

    wpi_sched()
        .args(["-f", fixture("schedule.xlsx").as_str(), "-o"])
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let content = std::fs::read_to_string(&output).expect("output file must exist");
    assert_eq!(content.matches("BEGIN:VEVENT").count(), 2);
    assert!(content.ends_with("END:VCALENDAR\n"));
}

#[test]
fn default_input_is_view_my_courses_in_cwd() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::copy(
        fixture("schedule.xlsx"),
        dir.path().join("View_My_Courses.xlsx"),
    )
    .unwrap();

    wpi_sched()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("SUMMARY:MA 1024 - Calculus IV"));
}

#[test]
fn config_flags_shape_the_events() {
    wpi_sched()
        .args([
            "-f",
            fixture("schedule.xlsx").as_str(),
            "--timezone",
            "America/Chicago",
            "--uid-domain",
            "example.edu",
            "--reminder-minutes",
            "5",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("DTSTART;TZID=America/Chicago:"))
        .stdout(predicate::str::contains("@example.edu\n"))
        .stdout(predicate::str::contains("TRIGGER:-PT5M"));
}

#[test]
fn verbose_logs_go_to_stderr() {
    wpi_sched()
        .args(["-v", "-f", fixture("schedule.xlsx").as_str()])
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("BEGIN:VCALENDAR"))
        .stderr(predicate::str::contains("no meeting pattern"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Failures
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn missing_input_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    wpi_sched()
        .current_dir(dir.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("View_My_Courses.xlsx"));
}

#[test]
fn missing_column_fails() {
    wpi_sched()
        .args(["-f", fixture("missing_column.xlsx").as_str()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unable to find column: End Date"))
        .stdout(predicate::str::is_empty());
}

#[test]
fn bad_pattern_fails_without_partial_output() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("schedule.ics");

    wpi_sched()
        .args(["-f", fixture("bad_pattern.xlsx").as_str(), "-o"])
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown weekday 'S'"));

    assert!(!output.exists(), "no output file should be created");
}

#[test]
fn invalid_timezone_fails() {
    wpi_sched()
        .args(["-f", fixture("schedule.xlsx").as_str(), "--timezone", "Mars/Base"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid timezone: Mars/Base"));
}

#[test]
fn help_lists_flags() {
    wpi_sched()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--file"))
        .stdout(predicate::str::contains("--output"))
        .stdout(predicate::str::contains("View_My_Courses.xlsx"));
}
