//! Tests for output formatting

use regex_rocket::core::models::{Flags, Highlight};
use regex_rocket::core::services::{annotate, compute_matches};
use regex_rocket::output::{ExplainReport, MatchReport, segments};

use crate::common::{DATE_PATTERN, SAMPLE_SUBJECT};

#[test]
fn test_segments_cover_subject_in_order() {
    let set = compute_matches(DATE_PATTERN, SAMPLE_SUBJECT, Flags::global()).unwrap();
    let parts = segments(SAMPLE_SUBJECT, &set.highlights);

    let rebuilt: String = parts.iter().map(|(text, _)| *text).collect();
    assert_eq!(rebuilt, SAMPLE_SUBJECT);

    let hits: Vec<_> = parts.iter().filter(|(_, hit)| *hit).map(|(text, _)| *text).collect();
    assert_eq!(hits, vec!["2023-10-27", "2024-01-01"]);
}

#[test]
fn test_segments_highlight_at_edges() {
    let parts = segments("abc", &[Highlight::new(0, 1), Highlight::new(2, 3)]);
    assert_eq!(parts, vec![("a", true), ("b", false), ("c", true)]);
}

#[test]
fn test_segments_skip_bad_spans() {
    let parts = segments("héllo", &[Highlight::new(2, 3), Highlight::new(4, 99)]);
    assert_eq!(parts, vec![("héllo", false)]);
}

#[test]
fn test_match_report_json() {
    let set = compute_matches(r"(\d)(x)?", "a1", Flags::global()).unwrap();
    let report = MatchReport {
        pattern: r"(\d)(x)?".to_string(),
        subject: "a1".to_string(),
        flags: Flags::global().to_string(),
        matches: set.matches,
        highlights: set.highlights,
        error: None,
    };

    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["flags"], "g");
    assert_eq!(value["matches"][0]["full_text"], "1");
    assert_eq!(value["matches"][0]["start"], 1);
    assert_eq!(value["matches"][0]["groups"], serde_json::json!(["1", null]));
    assert_eq!(value["highlights"], serde_json::json!([{ "start": 1, "end": 2 }]));
    assert!(value.get("error").is_none());
}

#[test]
fn test_invalid_report_carries_error() {
    let report = MatchReport {
        pattern: "(".to_string(),
        subject: String::new(),
        flags: String::new(),
        matches: Vec::new(),
        highlights: Vec::new(),
        error: Some("unbalanced parenthesis".to_string()),
    };
    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["error"], "unbalanced parenthesis");
}

#[test]
fn test_explain_report_json() {
    let report = ExplainReport {
        pattern: r"\d+".to_string(),
        fragments: annotate(r"\d+"),
    };
    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["fragments"][0]["category"], "character_class");
    assert_eq!(value["fragments"][1]["text"], "+");
    assert_eq!(value["fragments"][1]["category"], "anchor_or_meta");
}
