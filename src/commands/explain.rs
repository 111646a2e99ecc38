//! Explain command - token breakdown of a pattern

use regex_rocket::core::services::annotate;
use regex_rocket::output::{ExplainReport, OutputMode};

/// Print the token breakdown of `pattern`
pub fn explain(pattern: &str, mode: OutputMode) {
    ExplainReport {
        pattern: pattern.to_string(),
        fragments: annotate(pattern),
    }
    .render(mode);
}
