//! Shared test fixtures and helpers
//!
//! - `mocks.rs` - Fake assistant for the assistant port

pub mod mocks;

use std::path::{Path, PathBuf};

use regex_rocket::adapters::session_file;
use regex_rocket::core::models::{Flags, SessionState};
use tempfile::TempDir;

/// The subject a new interactive session starts with
pub const SAMPLE_SUBJECT: &str =
    "Today is 2023-10-27, but not 27-10-2023. Another date is 2024-01-01.";

/// The pattern a new interactive session starts with
pub const DATE_PATTERN: &str = r"\d{4}-\d{2}-\d{2}";

/// A session file in its own temporary directory
pub struct SessionFile {
    dir: TempDir,
    path: PathBuf,
}

impl SessionFile {
    /// Write `state` to a fresh session file
    pub fn with_state(state: &SessionState) -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let path = dir.path().join(session_file::SESSION_FILE_NAME);
        session_file::export(&path, state).expect("failed to write session file");
        Self { dir, path }
    }

    /// The sample date session
    pub fn sample() -> Self {
        Self::with_state(&SessionState::new(DATE_PATTERN, SAMPLE_SUBJECT, Flags::global()))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    /// Read the file back
    pub fn read(&self) -> SessionState {
        session_file::import(&self.path).expect("failed to read session file")
    }
}
