//! Tests for the match engine adapter

use regex_rocket::core::models::{Flags, Highlight, MatchSet};
use regex_rocket::core::services::{MatchError, compute_matches};

use crate::common::{DATE_PATTERN, SAMPLE_SUBJECT};

fn run(pattern: &str, subject: &str, flags: &str) -> MatchSet {
    compute_matches(pattern, subject, flags.parse().unwrap()).unwrap()
}

// =============================================================================
// Global scans
// =============================================================================

#[test]
fn test_sample_session_finds_two_dates() {
    let set = run(DATE_PATTERN, SAMPLE_SUBJECT, "g");
    let found: Vec<_> = set.matches.iter().map(|m| (m.full_text.as_str(), m.start)).collect();
    assert_eq!(found, vec![("2023-10-27", 9), ("2024-01-01", 57)]);
    assert_eq!(set.highlights, vec![Highlight::new(9, 19), Highlight::new(57, 67)]);
}

#[test]
fn test_groups_reported_per_match() {
    let set = run(r"(\w+)@(\w+)\.com", "ann@site.com, bob@mail.com", "g");
    assert_eq!(set.len(), 2);
    assert_eq!(
        set.matches[1].groups,
        vec![Some("bob".to_string()), Some("mail".to_string())]
    );
}

#[test]
fn test_empty_matches_produce_no_highlights() {
    let set = run("x*", "ab", "g");
    assert_eq!(set.len(), 3);
    assert!(set.matches.iter().all(|m| m.full_text.is_empty()));
    assert!(set.highlights.is_empty());
}

#[test]
fn test_mixed_empty_and_non_empty() {
    let set = run("a*", "baa", "g");
    let found: Vec<_> = set.matches.iter().map(|m| (m.full_text.as_str(), m.start)).collect();
    assert_eq!(found, vec![("", 0), ("aa", 1), ("", 3)]);
    assert_eq!(set.highlights, vec![Highlight::new(1, 3)]);
}

#[test]
fn test_multiline_anchors() {
    let set = run(r"^\w+$", "one\ntwo\nthree", "gm");
    assert_eq!(set.len(), 3);
    assert_eq!(set.matches[2].full_text, "three");

    let single = run(r"^\w+$", "one\ntwo\nthree", "g");
    assert!(single.is_empty());
}

#[test]
fn test_case_insensitive() {
    let set = run("rust", "Rust RUST rust", "gi");
    assert_eq!(set.len(), 3);
}

// =============================================================================
// First-match mode
// =============================================================================

#[test]
fn test_first_match_only_without_global() {
    let set = run(r"\d+", "10 20 30", "");
    assert_eq!(set.len(), 1);
    assert_eq!(set.matches[0].full_text, "10");
}

#[test]
fn test_no_match_is_not_an_error() {
    let set = run(r"\d", "letters only", "");
    assert!(set.is_empty());
    assert!(set.highlights.is_empty());
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn test_invalid_pattern_reports_diagnostic() {
    let err = compute_matches("[a-", "abc", Flags::global()).unwrap_err();
    let MatchError::InvalidPattern { message } = err;
    assert!(!message.is_empty());
}

#[test]
fn test_empty_pattern_is_not_invalid() {
    assert!(compute_matches("", "abc", Flags::global()).unwrap().is_empty());
}
