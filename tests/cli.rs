//! Integration tests for the coded-errors binary

use std::process::Command;

use pretty_assertions::assert_eq;

fn run(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_coded-errors"))
        .args(args)
        .output()
        .expect("binary should run")
}

#[test]
fn test_renders_message_to_stdout() {
    let output = run(&[
        "E-1",
        "-m",
        "Value {{v}} of {{name}}",
        "-a",
        "7",
        "-a",
        "width",
        "--mitigation",
        "Use {{limit|uq}}.",
        "-p",
        "limit=5",
    ]);
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "E-1: Value 7 of 'width' Use 5.\n"
    );
}

#[test]
fn test_check_reports_unresolved_placeholders() {
    let output = run(&["E-2", "-m", "Missing {{thing}}", "--check"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "E-2: Missing UNKNOWN PLACEHOLDER('thing')\n"
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("placeholder 'thing' in message has no parameter"));
}

#[test]
fn test_check_passes_when_everything_is_bound() {
    let output = run(&["E-3", "-m", "All {{good}}", "-u", "good=set", "--check"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "E-3: All set\n");
}

#[test]
fn test_missing_settings_file_fails() {
    let output = run(&["E-4", "-s", "/nonexistent/settings.toml"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Error loading settings"));
}
