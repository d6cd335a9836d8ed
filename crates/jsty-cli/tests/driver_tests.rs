//! Integration tests for the CLI driver.

use clap::Parser;
use jsty_cli::args::CliArgs;
use jsty_cli::driver;
use std::fs;
use tempfile::tempdir;

const TREE_JSON: &str = r#"{
    "type": "Program",
    "body": [{
        "type": "VariableDeclaration",
        "kind": "var",
        "declarations": [{
            "type": "VariableDeclarator",
            "id": {"type": "Identifier", "name": "a", "range": [4, 5]},
            "init": {"type": "ArrayExpression", "elements": [], "range": [8, 10]},
            "range": [4, 10]
        }],
        "range": [0, 11]
    }],
    "range": [0, 11]
}"#;

fn parse_args(argv: &[&str]) -> CliArgs {
    CliArgs::parse_from(std::iter::once("jsty").chain(argv.iter().copied()))
}

#[test]
fn test_typescript_output_written_to_file() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("tree.json");
    let output = dir.path().join("out.ts");
    fs::write(&input, TREE_JSON).unwrap();

    let args = parse_args(&[
        input.to_str().unwrap(),
        "-o",
        output.to_str().unwrap(),
    ]);
    driver::run(&args).unwrap();

    assert_eq!(fs::read_to_string(&output).unwrap(), "const a: any[] = [];");
}

#[test]
fn test_javascript_mode_flag() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("tree.json");
    let output = dir.path().join("out.js");
    fs::write(&input, TREE_JSON).unwrap();

    let args = parse_args(&[
        input.to_str().unwrap(),
        "--language",
        "javascript",
        "-o",
        output.to_str().unwrap(),
    ]);
    driver::run(&args).unwrap();

    assert_eq!(fs::read_to_string(&output).unwrap(), "var a = [];");
}

#[test]
fn test_no_insert_any_flag() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("tree.json");
    let output = dir.path().join("out.ts");
    fs::write(&input, TREE_JSON).unwrap();

    let args = parse_args(&[
        input.to_str().unwrap(),
        "--no-insert-any",
        "-o",
        output.to_str().unwrap(),
    ]);
    driver::run(&args).unwrap();

    assert_eq!(fs::read_to_string(&output).unwrap(), "const a = [];");
}

#[test]
fn test_verification_against_matching_reference() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("tree.json");
    let reference = dir.path().join("reference.js");
    let output = dir.path().join("out.ts");
    fs::write(&input, TREE_JSON).unwrap();
    fs::write(&reference, "var a = [];\n").unwrap();

    let args = parse_args(&[
        input.to_str().unwrap(),
        "--verify-against",
        reference.to_str().unwrap(),
        "-o",
        output.to_str().unwrap(),
    ]);
    driver::run(&args).unwrap();

    assert_eq!(fs::read_to_string(&output).unwrap(), "const a: any[] = [];");
}

#[test]
fn test_verification_failure_aborts() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("tree.json");
    let reference = dir.path().join("reference.js");
    fs::write(&input, TREE_JSON).unwrap();
    fs::write(&reference, "var b = [];\n").unwrap();

    let args = parse_args(&[
        input.to_str().unwrap(),
        "--verify-against",
        reference.to_str().unwrap(),
    ]);
    let err = driver::run(&args).unwrap_err();
    assert!(err.to_string().contains("reference rendering"));
}

#[test]
fn test_malformed_input_is_reported() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("tree.json");
    fs::write(&input, "{\"type\": \"Decorator\"}").unwrap();

    let args = parse_args(&[input.to_str().unwrap()]);
    let err = driver::run(&args).unwrap_err();
    assert!(err.to_string().contains("ESTree"));
}

#[test]
fn test_non_program_root_is_rejected() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("tree.json");
    fs::write(&input, r#"{"type": "Identifier", "name": "a"}"#).unwrap();

    let args = parse_args(&[input.to_str().unwrap()]);
    let err = driver::run(&args).unwrap_err();
    assert!(err.to_string().contains("Program root"));
}
