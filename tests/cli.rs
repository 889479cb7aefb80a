//! Command line tests for the selector-forge binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

const TOKEN_GRAMMAR: &str = r#"{
    "roles": [
        {"role": "verb", "tokens": ["transfer", "approve"]},
        {"role": "suffix", "tokens": [""]}
    ],
    "structures": ["(address,uint256)"]
}"#;

fn grammar_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

/// Binary run from an empty directory with no SELECTOR_FORGE_* overrides
fn forge(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("selector-forge").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("SELECTOR_FORGE_ALGORITHM")
        .env_remove("SELECTOR_FORGE_PARALLEL")
        .env_remove("SELECTOR_FORGE_GRAMMAR")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_match_found_exits_zero() {
    let dir = TempDir::new().unwrap();
    let grammar = grammar_file(TOKEN_GRAMMAR);

    forge(&dir)
        .arg("0xa9059cbb")
        .arg("--grammar")
        .arg(grammar.path())
        .assert()
        .code(0)
        .stdout(predicate::str::contains("MATCH FOUND: transfer(address,uint256)"));
}

#[test]
fn test_exhausted_exits_one() {
    let dir = TempDir::new().unwrap();
    let grammar = grammar_file(TOKEN_GRAMMAR);

    forge(&dir)
        .args(["00000000", "--grammar"])
        .arg(grammar.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("No match found after 2 candidates"));
}

#[test]
fn test_invalid_target_exits_two() {
    let dir = TempDir::new().unwrap();
    for target in ["zz", "ABCDEFGH", "0x123"] {
        forge(&dir)
            .arg(target)
            .assert()
            .code(2)
            .stderr(predicate::str::contains("Invalid target"));
    }
}

#[test]
fn test_empty_configuration_exits_three() {
    let dir = TempDir::new().unwrap();
    let grammar = grammar_file(
        r#"{"roles": [{"role": "verb", "tokens": []}], "structures": ["()"]}"#,
    );

    forge(&dir)
        .arg("a9059cbb")
        .arg("-g")
        .arg(grammar.path())
        .assert()
        .code(3)
        .stderr(predicate::str::contains("'verb' yields no candidates"));
}

#[test]
fn test_all_empty_names_exit_three() {
    let dir = TempDir::new().unwrap();
    let grammar = grammar_file(
        r#"{"roles": [{"role": "verb", "tokens": [""]}, {"role": "noun", "tokens": [""]}], "structures": ["(uint256)"]}"#,
    );

    forge(&dir)
        .arg("a9059cbb")
        .arg("--grammar")
        .arg(grammar.path())
        .assert()
        .code(3)
        .stderr(predicate::str::contains("'name' yields no candidates"));
}

#[test]
fn test_progress_with_parallel_rejected() {
    let dir = TempDir::new().unwrap();
    let grammar = grammar_file(TOKEN_GRAMMAR);

    forge(&dir)
        .args(["a9059cbb", "--progress", "--parallel", "--grammar"])
        .arg(grammar.path())
        .assert()
        .code(3)
        .stderr(predicate::str::contains("--progress is only available"));

    forge(&dir)
        .args(["a9059cbb", "--progress", "--grammar"])
        .arg(grammar.path())
        .env("SELECTOR_FORGE_PARALLEL", "true")
        .assert()
        .code(3);

    forge(&dir)
        .args(["a9059cbb", "--progress", "--grammar"])
        .arg(grammar.path())
        .assert()
        .code(0)
        .stdout(predicate::str::contains("MATCH FOUND: transfer(address,uint256)"));
}

#[test]
fn test_json_output() {
    let dir = TempDir::new().unwrap();
    let grammar = grammar_file(TOKEN_GRAMMAR);

    let output = forge(&dir)
        .args(["0x095ea7b3", "--json", "--grammar"])
        .arg(grammar.path())
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(0));

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["outcome"]["status"], "found");
    assert_eq!(report["outcome"]["candidate"], "approve(address,uint256)");
    assert_eq!(report["algorithm"], "keccak256");
    assert_eq!(report["candidates_tried"], 2);
}

#[test]
fn test_match_subcommand() {
    let dir = TempDir::new().unwrap();
    let grammar = grammar_file(TOKEN_GRAMMAR);

    forge(&dir)
        .args(["match", "0xa9059cbb", "0x095ea7b3", "--grammar"])
        .arg(grammar.path())
        .assert()
        .code(0)
        .stdout(predicate::str::contains("0xa9059cbb -> transfer(address,uint256)"))
        .stdout(predicate::str::contains("0x095ea7b3 -> approve(address,uint256)"));

    forge(&dir)
        .args(["match", "0xa9059cbb", "0xdeadbeef", "--grammar"])
        .arg(grammar.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("0xdeadbeef - no match"));
}

#[test]
fn test_parallel_flag() {
    let dir = TempDir::new().unwrap();
    let grammar = grammar_file(TOKEN_GRAMMAR);

    forge(&dir)
        .args(["A9059CBB", "--parallel", "--grammar"])
        .arg(grammar.path())
        .assert()
        .code(0)
        .stdout(predicate::str::contains("transfer(address,uint256)"));
}

#[test]
fn test_grammar_from_environment() {
    let dir = TempDir::new().unwrap();
    let grammar = grammar_file(TOKEN_GRAMMAR);

    forge(&dir)
        .arg("0xa9059cbb")
        .env("SELECTOR_FORGE_GRAMMAR", grammar.path())
        .assert()
        .code(0);
}

#[test]
fn test_unknown_preset_exits_three() {
    let dir = TempDir::new().unwrap();
    forge(&dir)
        .args(["a9059cbb", "--preset", "nope"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("unknown preset"));
}

#[test]
fn test_help_and_presets() {
    let dir = TempDir::new().unwrap();
    forge(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("USAGE"));

    forge(&dir)
        .arg("presets")
        .assert()
        .success()
        .stdout(predicate::str::contains("portal"))
        .stdout(predicate::str::contains("router"));
}

#[test]
fn test_unknown_option() {
    let dir = TempDir::new().unwrap();
    forge(&dir)
        .args(["a9059cbb", "--fast"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("unknown option"));
}
