//! Generative assistant port
//!
//! Defines the three requests the tool makes of a generative-language
//! service. Failures carry a user-facing message that starts with
//! `Error:`, which callers print verbatim.

use std::future::Future;

use thiserror::Error;

/// Which assistant request failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssistKind {
    /// Pattern from a free-text description
    GeneratePattern,
    /// Explanation of a pattern
    ExplainPattern,
    /// Sample subject text for a pattern
    GenerateSample,
}

impl AssistKind {
    /// The message shown to the user when this request fails
    #[must_use]
    pub const fn failure_message(self) -> &'static str {
        match self {
            Self::GeneratePattern => "Error: Could not generate regex.",
            Self::ExplainPattern => "Error: Could not explain regex.",
            Self::GenerateSample => "Error: Could not generate a test string.",
        }
    }
}

/// An assistant request failed
///
/// Displays as the user-facing `Error: ...` message; the underlying cause
/// is kept in [`AssistantError::detail`] for logging.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", .kind.failure_message())]
pub struct AssistantError {
    /// The failed request
    pub kind: AssistKind,
    /// What went wrong underneath
    pub detail: String,
}

impl AssistantError {
    /// Create an error for `kind` with an underlying cause
    #[must_use]
    pub fn new(kind: AssistKind, detail: impl Into<String>) -> Self {
        Self {
            kind,
            detail: detail.into(),
        }
    }
}

/// A generative-language service
///
/// Implementations are injected at the call site so commands can be
/// exercised with a fake.
pub trait Assistant {
    /// Produce a pattern (text only, no delimiters) from a description
    fn generate_pattern(
        &self,
        description: &str,
    ) -> impl Future<Output = Result<String, AssistantError>> + Send;

    /// Explain a pattern part by part, as Markdown-ish text
    fn explain_pattern(
        &self,
        pattern: &str,
    ) -> impl Future<Output = Result<String, AssistantError>> + Send;

    /// Produce subject text with both matching and non-matching examples
    fn generate_sample_text(
        &self,
        pattern: &str,
    ) -> impl Future<Output = Result<String, AssistantError>> + Send;
}
