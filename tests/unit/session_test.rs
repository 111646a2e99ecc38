//! Tests for session files and the live session

use std::fs;

use regex_rocket::adapters::session_file::{self, ImportError, from_json};
use regex_rocket::core::models::{Flags, Session, SessionState};

use crate::common::{DATE_PATTERN, SAMPLE_SUBJECT, SessionFile};

// =============================================================================
// Import validation
// =============================================================================

#[test]
fn test_exported_file_imports_identically() {
    let state = SessionState::new(
        r"(\d+)-(\d+)",
        "1-2\n\"quoted\"\ttabbed",
        "im".parse().unwrap(),
    );
    let file = SessionFile::with_state(&state);
    assert_eq!(file.read(), state);
}

#[test]
fn test_file_layout() {
    let file = SessionFile::sample();
    let text = fs::read_to_string(file.path()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();

    assert_eq!(value["regex"], DATE_PATTERN);
    assert_eq!(value["testString"], SAMPLE_SUBJECT);
    assert_eq!(value["flags"], serde_json::json!({ "g": true, "i": false, "m": false }));
}

#[test]
fn test_flag_members_only_count_when_true() {
    let state = from_json(
        r#"{"regex":"a","testString":"b","flags":{"g":"yes","i":1,"m":true,"x":true}}"#,
    )
    .unwrap();
    assert_eq!(
        state.flags,
        Flags {
            global: false,
            case_insensitive: false,
            multiline: true,
        }
    );
}

#[test]
fn test_empty_flags_object_is_valid() {
    let state = from_json(r#"{"regex":"","testString":"","flags":{}}"#).unwrap();
    assert_eq!(state, SessionState::new("", "", Flags::none()));
}

#[test]
fn test_shape_errors() {
    for text in [
        r#"[]"#,
        r#"{"testString":"b","flags":{}}"#,
        r#"{"regex":1,"testString":"b","flags":{}}"#,
        r#"{"regex":"a","testString":null,"flags":{}}"#,
        r#"{"regex":"a","testString":"b"}"#,
        r#"{"regex":"a","testString":"b","flags":"gi"}"#,
    ] {
        assert!(
            matches!(from_json(text), Err(ImportError::Shape(_))),
            "accepted {text}"
        );
    }
}

#[test]
fn test_parse_and_io_errors() {
    assert!(matches!(from_json("{ not json"), Err(ImportError::Parse(_))));

    let file = SessionFile::sample();
    let missing = file.dir().join("missing.json");
    assert!(matches!(session_file::import(&missing), Err(ImportError::Io(_))));
}

#[test]
fn test_error_messages() {
    let parse = from_json("nope").unwrap_err().to_string();
    assert!(parse.starts_with("Failed to read or parse the session file"));

    let shape = from_json("{}").unwrap_err().to_string();
    assert!(shape.starts_with("Invalid session file format"));
}

// =============================================================================
// Live session
// =============================================================================

#[test]
fn test_failed_import_keeps_previous_state() {
    let mut session = Session::new(SessionState::new("keep", "this", Flags::global()));

    if let Ok(state) = from_json(r#"{"regex":true}"#) {
        session.replace(state);
    }

    assert_eq!(session.state().regex, "keep");
    assert_eq!(session.revision(), 0);
}

#[test]
fn test_pattern_reply_after_flag_change_is_stale() {
    let mut session = Session::new(SessionState::new("a", "b", Flags::global()));
    let ticket = session.ticket();
    session.set_flags(Flags::none());

    let stale = session.apply_pattern(ticket, "z+").unwrap_err();
    assert_eq!((stale.requested, stale.current), (0, 1));
    assert_eq!(session.state().regex, "a");
}

#[test]
fn test_fresh_ticket_after_edit_applies() {
    let mut session = Session::default();
    session.set_pattern(r"\w+");
    let ticket = session.ticket();

    session.apply_pattern(ticket, r"\d+").unwrap();
    assert_eq!(session.state().regex, r"\d+");
    assert_eq!(ticket.revision(), 1);
}
