//! Smoke tests for the refdex binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn refdex() -> Command {
    Command::cargo_bin("refdex").expect("binary builds")
}

#[test]
fn format_command_renders_a_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "Rules: 1) Do X. 2) Do Y.").unwrap();

    refdex()
        .arg("format")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Rules<ul><li>Do X</li><li>Do Y</li></ul>"));
}

#[test]
fn format_command_reads_stdin() {
    refdex()
        .arg("format")
        .arg("-")
        .write_stdin("you MUST retry")
        .assert()
        .success()
        .stdout(predicate::str::contains("<strong>MUST</strong>"));
}

#[test]
fn format_command_fails_on_missing_file() {
    refdex()
        .arg("format")
        .arg("no-such-file.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error reading file"));
}

#[test]
fn render_command_emits_article_html() {
    refdex()
        .arg("render")
        .arg("retry-backoff")
        .assert()
        .success()
        .stdout(predicate::str::contains("<h1>Retry with exponential backoff</h1>"));
}

#[test]
fn render_command_fails_on_unknown_id() {
    refdex()
        .arg("render")
        .arg("missing")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no article with id"));
}

#[test]
fn list_command_shows_catalog_entries() {
    refdex()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("retry-backoff"));
}

#[test]
fn list_command_filters_by_category() {
    refdex()
        .args(["list", "--category", "storage"])
        .assert()
        .success()
        .stdout(predicate::str::contains("btree-pages").and(predicate::str::contains("retry-backoff").not()));
}

#[test]
fn list_command_rejects_unknown_category() {
    refdex()
        .args(["list", "--category", "gardening"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown category"));
}

#[test]
fn search_command_finds_matches() {
    refdex()
        .args(["search", "jitter"])
        .assert()
        .success()
        .stdout(predicate::str::contains("retry-backoff"));
}

#[test]
fn search_command_emits_json() {
    refdex()
        .args(["search", "jitter", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"id\": \"retry-backoff\""));
}
