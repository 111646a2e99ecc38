//! Prompt construction and reply checking for assistant requests
//!
//! Adapters send [`prompt`] to their model and pass the raw reply through
//! [`check_reply`] before handing it back.

use crate::core::ports::{AssistKind, AssistantError};

/// Marker that flags a reply as a failure
pub const ERROR_MARKER: &str = "Error:";

/// Build the model prompt for a request
#[must_use]
pub fn prompt(kind: AssistKind, input: &str) -> String {
    match kind {
        AssistKind::GeneratePattern => format!(
            "You are an expert in regular expressions. Based on the following description, \
             generate ONLY the regular expression pattern. Do not include any explanations, \
             comments, or enclosing characters like ` or /.\nDescription: \"{input}\""
        ),
        AssistKind::ExplainPattern => format!(
            "You are an expert in regular expressions. Explain the following regular expression \
             in simple terms. Break it down part by part. Provide the explanation in Markdown \
             format.\nRegular Expression: `{input}`"
        ),
        AssistKind::GenerateSample => format!(
            "You are a helpful assistant that creates test data for regular expressions. Based on \
             the following regex, generate a single block of text to be used as a test string. \
             The text should be creative and include multiple examples that WILL match the regex \
             and some examples that WILL NOT match it, to ensure comprehensive testing. Do not \
             provide any explanation, just the text block.\nRegex: `{input}`"
        ),
    }
}

/// Whether a reply carries the failure marker
#[must_use]
pub fn is_error_reply(text: &str) -> bool {
    text.trim_start().starts_with(ERROR_MARKER)
}

/// Validate and normalize a raw model reply
///
/// Replies that begin with the failure marker, or generated patterns and
/// samples that are blank, become errors. Patterns and samples are
/// trimmed; explanations are returned as-is.
pub fn check_reply(kind: AssistKind, text: String) -> Result<String, AssistantError> {
    if is_error_reply(&text) {
        return Err(AssistantError::new(kind, text));
    }

    match kind {
        AssistKind::ExplainPattern => Ok(text),
        AssistKind::GeneratePattern | AssistKind::GenerateSample => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                Err(AssistantError::new(kind, "empty reply"))
            } else {
                Ok(trimmed.to_string())
            }
        },
    }
}
