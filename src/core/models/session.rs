//! Session state
//!
//! [`SessionState`] is everything that gets exported: pattern, subject,
//! and flags. [`Session`] wraps it for interactive use and counts edits,
//! so a slow assistant reply can be recognized as stale once the user has
//! moved on.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::Flags;

/// The persisted triple
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    /// Pattern text
    pub regex: String,
    /// Subject text
    #[serde(rename = "testString")]
    pub test_string: String,
    /// Mode flags
    pub flags: Flags,
}

impl SessionState {
    /// Create a new state
    #[must_use]
    pub fn new(regex: impl Into<String>, test_string: impl Into<String>, flags: Flags) -> Self {
        Self {
            regex: regex.into(),
            test_string: test_string.into(),
            flags,
        }
    }
}

/// Reply arrived after the session was edited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("discarded stale assistant reply (requested at revision {requested}, session is at {current})")]
pub struct StaleResponse {
    /// Revision the request was issued at
    pub requested: u64,
    /// Revision of the session when the reply arrived
    pub current: u64,
}

/// Marks the session revision an assistant request was issued against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssistTicket {
    revision: u64,
}

impl AssistTicket {
    /// Revision the ticket was issued at
    #[must_use]
    pub const fn revision(self) -> u64 {
        self.revision
    }
}

/// A live, editable session
#[derive(Debug, Clone, Default)]
pub struct Session {
    state: SessionState,
    revision: u64,
}

impl Session {
    /// Start a session from an initial state
    #[must_use]
    pub const fn new(state: SessionState) -> Self {
        Self { state, revision: 0 }
    }

    /// Current state
    #[must_use]
    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    /// Number of edits so far
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Replace the pattern
    pub fn set_pattern(&mut self, pattern: impl Into<String>) {
        self.state.regex = pattern.into();
        self.bump();
    }

    /// Replace the subject
    pub fn set_subject(&mut self, subject: impl Into<String>) {
        self.state.test_string = subject.into();
        self.bump();
    }

    /// Replace the flags
    pub fn set_flags(&mut self, flags: Flags) {
        self.state.flags = flags;
        self.bump();
    }

    /// Replace the whole state (e.g. after an import)
    pub fn replace(&mut self, state: SessionState) {
        self.state = state;
        self.bump();
    }

    /// Issue a ticket for an assistant request made now
    #[must_use]
    pub const fn ticket(&self) -> AssistTicket {
        AssistTicket {
            revision: self.revision,
        }
    }

    /// Apply generated sample text, unless the session changed since `ticket`
    pub fn apply_sample(&mut self, ticket: AssistTicket, text: impl Into<String>) -> Result<(), StaleResponse> {
        self.check_fresh(ticket)?;
        self.set_subject(text);
        Ok(())
    }

    /// Apply a generated pattern, unless the session changed since `ticket`
    pub fn apply_pattern(&mut self, ticket: AssistTicket, text: impl Into<String>) -> Result<(), StaleResponse> {
        self.check_fresh(ticket)?;
        self.set_pattern(text);
        Ok(())
    }

    fn check_fresh(&self, ticket: AssistTicket) -> Result<(), StaleResponse> {
        if ticket.revision == self.revision {
            Ok(())
        } else {
            Err(StaleResponse {
                requested: ticket.revision,
                current: self.revision,
            })
        }
    }

    const fn bump(&mut self) {
        self.revision += 1;
    }
}
