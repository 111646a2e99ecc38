//! Session files and the interactive shell

use std::fs;

use predicates::prelude::*;
use tempfile::TempDir;

use super::rocket;

#[test]
fn test_export_then_test_from_session() {
    let temp = TempDir::new().unwrap();
    rocket(&temp)
        .args(["session", "export", r"\d+", "-s", "a1 b22", "--flags", "gi"])
        .assert()
        .success()
        .stdout(predicate::str::contains("regex-rocket-session.json"));

    let text = fs::read_to_string(temp.path().join("regex-rocket-session.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["regex"], r"\d+");
    assert_eq!(value["testString"], "a1 b22");
    assert_eq!(value["flags"], serde_json::json!({ "g": true, "i": true, "m": false }));

    rocket(&temp)
        .args(["test", "--session", "regex-rocket-session.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(2 found)"));

    // Command-line values override the session
    rocket(&temp)
        .args(["test", "b", "--session", "regex-rocket-session.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(1 found)"));
}

#[test]
fn test_import_shows_contents() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("s.json"),
        r#"{"regex":"x+","testString":"xx","flags":{"g":true}}"#,
    )
    .unwrap();

    rocket(&temp)
        .args(["session", "import", "s.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("/x+/g"));
}

#[test]
fn test_import_rejects_bad_shape() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("s.json"), r#"{"regex":"x+"}"#).unwrap();

    rocket(&temp)
        .args(["session", "import", "s.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid session file format"));
}

#[test]
fn test_shell_session() {
    let temp = TempDir::new().unwrap();
    let script = "\
pattern [a-z]+
subject abc 123 def
flags g
export shell.json
nonsense
import missing.json
show
quit
";
    rocket(&temp)
        .arg("shell")
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("(2 found)"))
        .stderr(predicate::str::contains("Unknown command 'nonsense'"))
        .stderr(predicate::str::contains("Failed to read or parse the session file"));

    let text = fs::read_to_string(temp.path().join("shell.json")).unwrap();
    assert!(text.contains("\"testString\": \"abc 123 def\""));
}

#[test]
fn test_shell_starts_with_sample_session() {
    let temp = TempDir::new().unwrap();
    rocket(&temp)
        .arg("shell")
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Match Information (2 found)"));
}
