
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("lalr")
        .join("tests")
        .join("data")
        .join(name)
}

#[test]
fn prints_both_derivations() {
    let mut cmd = cargo_bin_cmd!("lalr");
    cmd.arg("--grammar").arg(fixture_path("expr.grammar"))
        .arg("--table").arg(fixture_path("expr.table"))
        .arg("id + ( id )");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Reverse Rightmost Derivation: 3 2 3 2 4 1\n"))
        .stdout(predicate::str::contains("        Rightmost Derivation: 1 4 2 3 2 3\n"));
}

#[test]
fn reads_the_default_files() {
    let dir = tempfile::tempdir().unwrap();
    fs::copy(fixture_path("anbn.grammar"), dir.path().join("grammar.txt")).unwrap();
    fs::copy(fixture_path("anbn.table"), dir.path().join("parser.txt")).unwrap();

    let mut cmd = cargo_bin_cmd!("lalr");
    cmd.current_dir(dir.path()).arg("a a b b");

    cmd.assert()
        .success()
        .stdout(predicate::eq("Reverse Rightmost Derivation: 2 1\n        Rightmost Derivation: 1 2\n"));
}

#[test]
fn steps_and_dump() {
    let mut cmd = cargo_bin_cmd!("lalr");
    cmd.arg("-g").arg(fixture_path("anbn.grammar"))
        .arg("-t").arg(fixture_path("anbn.table"))
        .arg("--steps")
        .arg("--dump")
        .arg("aabb");

    let output_pred = predicate::str::contains("  1. S -> a S b")
        .and(predicate::str::contains("Action Table:"))
        .and(predicate::str::contains("  $ 0 -3 0 0 -2 -1"))
        .and(predicate::str::contains("    S\n  => a S b\n  => a a b b\n"));

    cmd.assert().success().stdout(output_pred);
}

#[test]
fn wrong_argument_count_prints_usage() {
    let mut cmd = cargo_bin_cmd!("lalr");
    cmd.assert().success().stdout(predicate::str::contains("USAGE"));

    let mut cmd = cargo_bin_cmd!("lalr");
    cmd.arg("a").arg("b");
    cmd.assert().success().stdout(predicate::str::contains("Derivation").not());
}

#[test]
fn unknown_symbol_fails() {
    let mut cmd = cargo_bin_cmd!("lalr");
    cmd.arg("--grammar").arg(fixture_path("anbn.grammar"))
        .arg("--table").arg(fixture_path("anbn.table"))
        .arg("a c");

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Unknown symbol 'c' found during lexicating at 1:3."));
}

#[test]
fn unbalanced_input_fails() {
    let mut cmd = cargo_bin_cmd!("lalr");
    cmd.arg("--grammar").arg(fixture_path("anbn.grammar"))
        .arg("--table").arg(fixture_path("anbn.table"))
        .arg("a a b");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Parser hit an empty cell while parsing"));
}

#[test]
fn bad_table_is_reported_with_its_location() {
    let dir = tempfile::tempdir().unwrap();
    let table = fs::read_to_string(fixture_path("anbn.table")).unwrap()
        .replace("b     0  0  4  5 -2 -1", "b     0  0  4  5 -2");
    let path = dir.path().join("short.table");
    fs::write(&path, table).unwrap();

    let mut cmd = cargo_bin_cmd!("lalr");
    cmd.arg("--grammar").arg(fixture_path("anbn.grammar"))
        .arg("--table").arg(&path)
        .arg("a b");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("short.table:{8:1-8:19}"))
        .stderr(predicate::str::contains("Expected 6 integers for the row of 'b', found 5."));
}

#[test]
fn missing_grammar_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = cargo_bin_cmd!("lalr");
    cmd.current_dir(dir.path()).arg("a b");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Couldn't open grammar.txt"));
}
