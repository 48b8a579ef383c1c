//! Integration tests for the leetdict binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

fn leetdict() -> Command {
    Command::cargo_bin("leetdict").unwrap()
}

#[test]
fn prints_all_combinations() {
    leetdict()
        .args(["-q", "b", "c"])
        .assert()
        .success()
        .stdout("b\nB\nc\nC\nbc\nbC\nBc\nBC\n");
}

#[test]
fn prints_permutation_window() {
    leetdict()
        .args(["-q", "-p", "--start", "8", "--end", "12", "b", "c"])
        .assert()
        .success()
        .stdout("cb\ncB\nCb\nCB\n");
}

#[test]
fn number_reports_count() {
    leetdict()
        .args(["-n", "-p", "b", "c"])
        .assert()
        .success()
        .stdout("12\n");

    leetdict()
        .args(["--number", "ha"])
        .assert()
        .success()
        .stdout("8\n");
}

#[test]
fn number_honours_length_filter() {
    // "b" and "c" are too short, only "bc" and "cb" remain
    leetdict()
        .args(["-n", "-p", "-m", "2", "b", "c"])
        .assert()
        .success()
        .stdout("8\n");
}

#[test]
fn empty_window_is_rejected() {
    leetdict()
        .args(["--start", "5", "--end", "5", "b", "c"])
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("Invalid window"));

    leetdict()
        .args(["--start", "5", "--end", "2", "b", "c"])
        .assert()
        .failure()
        .stdout("");
}

#[test]
fn start_past_end_is_empty_not_an_error() {
    leetdict()
        .args(["-q", "--start", "100", "b", "c"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn missing_words_fail() {
    leetdict()
        .args(["-p"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No words given"));
}

#[test]
fn unique_drops_repeats() {
    leetdict()
        .args(["-q", "-u", "b", "b"])
        .assert()
        .success()
        .stdout("b\nB\nbb\nbB\nBb\nBB\n");
}

#[test]
fn reads_wordlist_and_writes_file() {
    let mut seeds = NamedTempFile::new().unwrap();
    writeln!(seeds, "c").unwrap();

    let out_dir = TempDir::new().unwrap();
    let out_path = out_dir.path().join("dict.txt");

    leetdict()
        .arg("-q")
        .arg("-w")
        .arg(seeds.path())
        .arg("-o")
        .arg(&out_path)
        .arg("b")
        .assert()
        .success()
        .stdout("");

    let content = std::fs::read_to_string(&out_path).unwrap();
    assert_eq!(content, "b\nB\nc\nC\nbc\nbC\nBc\nBC\n");
}

#[test]
fn stats_summary_on_stderr() {
    leetdict()
        .args(["--stats", "b"])
        .assert()
        .success()
        .stdout("b\nB\n")
        .stderr(predicate::str::contains("GENERATION COMPLETE"));
}
