//! Match engine adapter - runs a pattern over a subject
//!
//! The engine itself is `regress` (ECMAScript syntax, backtracking). This
//! module only drives it: one search in non-global mode, a cursor loop in
//! global mode, and conversion of engine matches into [`MatchRecord`]s.

use log::debug;
use regress::Regex;
use thiserror::Error;

use crate::core::models::{Flags, MatchRecord, MatchSet};

/// Why a match run failed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    /// The engine rejected the pattern; `message` is its diagnostic, unaltered
    #[error("{message}")]
    InvalidPattern {
        /// Engine diagnostic text
        message: String,
    },
}

/// Compile a pattern under the given flags
pub fn compile(pattern: &str, flags: Flags) -> Result<Regex, MatchError> {
    Regex::with_flags(pattern, flags.engine_flags().as_str()).map_err(|e| {
        MatchError::InvalidPattern {
            message: e.to_string(),
        }
    })
}

/// Run `pattern` over `subject`
///
/// An empty pattern yields no matches and never reaches the engine.
/// Without the global flag at most one match is returned. With it, every
/// non-overlapping match is collected left to right; zero-length matches
/// are kept in `matches` but never produce a highlight.
///
/// # Examples
///
/// ```
/// use regex_rocket::core::models::Flags;
/// use regex_rocket::core::services::compute_matches;
///
/// let set = compute_matches(r"\d+", "a1 b22", Flags::global()).unwrap();
/// assert_eq!(set.matches.len(), 2);
/// assert_eq!(set.matches[1].full_text, "22");
/// assert_eq!(set.matches[1].start, 4);
/// ```
pub fn compute_matches(pattern: &str, subject: &str, flags: Flags) -> Result<MatchSet, MatchError> {
    if pattern.is_empty() {
        return Ok(MatchSet::empty());
    }

    let regex = compile(pattern, flags)?;
    debug!("compiled {pattern:?} with flags {flags:?}");

    let mut set = MatchSet::empty();

    if !flags.global {
        if let Some(m) = regex.find(subject) {
            set.push(to_record(&m, subject));
        }
        return Ok(set);
    }

    // Cursor state machine: a non-empty match moves the cursor to its end,
    // an empty one moves it one character past the match position. Once
    // the cursor passes the end of the subject the scan stops.
    let mut position = 0;
    while position <= subject.len() {
        let Some(m) = regex.find_from(subject, position).next() else {
            break;
        };
        let record = to_record(&m, subject);
        position = if record.is_empty() {
            step_past(subject, record.start)
        } else {
            record.end()
        };
        set.push(record);
    }

    debug!("{} match(es), {} highlight(s)", set.matches.len(), set.highlights.len());
    Ok(set)
}

fn to_record(m: &regress::Match, subject: &str) -> MatchRecord {
    let range = m.range();
    MatchRecord {
        full_text: subject[range.clone()].to_string(),
        start: range.start,
        groups: m
            .groups()
            .skip(1)
            .map(|group| group.map(|r| subject[r].to_string()))
            .collect(),
    }
}

/// Byte offset of the character after `at`, or `at + 1` at the end
fn step_past(subject: &str, at: usize) -> usize {
    subject[at..].chars().next().map_or(at + 1, |c| at + c.len_utf8())
}
