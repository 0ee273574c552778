//! Integration tests for the command-line binary
//!
//! These tests run the compiled `dataconv` binary end to end:
//! - Reading from a file or from standard input
//! - Writing to stdout or to an output file
//! - Exit status and messages on failure

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

fn run(args: &[&str], stdin: Option<&str>) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_dataconv"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to start dataconv");

    {
        let mut handle = child.stdin.take().expect("stdin is piped");
        if let Some(input) = stdin {
            handle.write_all(input.as_bytes()).expect("failed to write stdin");
        }
    }

    child.wait_with_output().expect("failed to wait for dataconv")
}

fn write_file(dir: &TempDir, name: &str, content: &str) -> String {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path.to_string_lossy().into_owned()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_file_input_with_inferred_source() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "user.json", r#"{"name":"Alice","age":30}"#);

    let output = run(&[&input, "--to", "yaml"], None);
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output), "name: Alice\nage: 30\n");
}

#[test]
fn test_stdin_input() {
    let output = run(
        &["--stdin", "--from", "csv", "--to", "json"],
        Some("name,age,city\nJohn,25,New York\n"),
    );
    assert!(output.status.success(), "{}", stderr(&output));
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(
        value,
        serde_json::json!([{"name": "John", "age": "25", "city": "New York"}])
    );
}

#[test]
fn test_output_file_and_naming_options() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "order.yml", "id: 7\ntotal: 9.5\n");
    let out_path = dir.path().join("nested").join("order.ts");
    let out = out_path.to_string_lossy().into_owned();

    let output = run(
        &[&input, "--to", "ts", "--type-name", "Order", "-o", &out, "--quiet"],
        None,
    );
    assert!(output.status.success(), "{}", stderr(&output));
    assert!(stdout(&output).is_empty());
    assert!(Path::new(&out).exists());
    assert_eq!(
        std::fs::read_to_string(&out_path).unwrap(),
        "interface Order {\n  id: number;\n  total: number;\n}"
    );
}

#[test]
fn test_javascript_variable_name_and_indent() {
    let output = run(
        &["--stdin", "--from", "json", "--to", "js", "--variable-name", "cfg", "--indent", "4"],
        Some(r#"{"debug":true}"#),
    );
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output), "const cfg = {\n    debug: true\n};\n");
}

#[test]
fn test_parse_failure_exit_code() {
    let output = run(&["--stdin", "--from", "json", "--to", "yaml"], Some(r#"{name: "x"}"#));
    assert!(!output.status.success());
    let err = stderr(&output);
    assert!(err.contains("✗ Invalid JSON format: "), "{}", err);
    assert!(err.contains("dataconv --help"), "{}", err);
}

#[test]
fn test_empty_input_message() {
    let output = run(&["--stdin", "--from", "yaml", "--to", "json"], Some("  \n"));
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Please enter some data to convert"));
}

#[test]
fn test_unknown_extension_needs_from() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "data.txt", "{}");

    let output = run(&[&input, "--to", "yaml"], None);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("--from"));
}

#[test]
fn test_stats_and_verbose_go_to_stderr() {
    let output = run(
        &["--stdin", "--from", "json", "--to", "json", "--stats", "--verbose"],
        Some("[1]"),
    );
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output), "[\n  1\n]\n");
    let err = stderr(&output);
    assert!(err.contains("Conversion statistics:"));
    assert!(err.contains("Converting standard input from JSON to JSON"));
}
