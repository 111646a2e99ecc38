//! Session file export and import
//!
//! A session file is a JSON object with exactly three members:
//!
//! ```json
//! {
//!   "regex": "\\d+",
//!   "testString": "a1 b22",
//!   "flags": { "g": true, "i": false, "m": false }
//! }
//! ```
//!
//! Import checks the shape (`regex` and `testString` strings, `flags` an
//! object) and rejects the whole file on any mismatch. Members of `flags`
//! are not validated: a flag counts as set only when it is JSON `true`.

use std::fs;
use std::path::Path;

use log::info;
use serde_json::Value;
use thiserror::Error;

use crate::core::models::{Flags, SessionState};

/// Default export file name
pub const SESSION_FILE_NAME: &str = "regex-rocket-session.json";

/// Why an import was rejected
#[derive(Debug, Error)]
pub enum ImportError {
    /// The file could not be read
    #[error("Failed to read or parse the session file: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not JSON
    #[error("Failed to read or parse the session file: {0}")]
    Parse(#[from] serde_json::Error),

    /// The JSON does not have the session shape
    #[error("Invalid session file format: {0}")]
    Shape(&'static str),
}

/// Serialize a session as pretty-printed JSON
pub fn to_json(state: &SessionState) -> serde_json::Result<String> {
    serde_json::to_string_pretty(state)
}

/// Parse and validate session JSON
pub fn from_json(text: &str) -> Result<SessionState, ImportError> {
    let value: Value = serde_json::from_str(text)?;
    let object = value
        .as_object()
        .ok_or(ImportError::Shape("expected a JSON object"))?;

    let regex = object
        .get("regex")
        .and_then(Value::as_str)
        .ok_or(ImportError::Shape("`regex` must be a string"))?;
    let test_string = object
        .get("testString")
        .and_then(Value::as_str)
        .ok_or(ImportError::Shape("`testString` must be a string"))?;
    let flags = object
        .get("flags")
        .and_then(Value::as_object)
        .ok_or(ImportError::Shape("`flags` must be an object"))?;

    let is_set = |key: &str| flags.get(key).and_then(Value::as_bool).unwrap_or(false);

    Ok(SessionState::new(
        regex,
        test_string,
        Flags {
            global: is_set("g"),
            case_insensitive: is_set("i"),
            multiline: is_set("m"),
        },
    ))
}

/// Write a session file
pub fn export(path: &Path, state: &SessionState) -> anyhow::Result<()> {
    let content = to_json(state)?;
    fs::write(path, content)?;
    info!("Exported session to {}", path.display());
    Ok(())
}

/// Read and validate a session file
pub fn import(path: &Path) -> Result<SessionState, ImportError> {
    let text = fs::read_to_string(path)?;
    let state = from_json(&text)?;
    info!("Imported session from {}", path.display());
    Ok(state)
}
