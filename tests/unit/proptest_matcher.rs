//! Property-based tests for the matcher and annotator
//!
//! Uses proptest to verify properties that should hold for all inputs.

use proptest::prelude::*;
use regex_rocket::core::models::Flags;
use regex_rocket::core::services::{annotate, compute_matches};
use regex_rocket::output::segments;

/// Patterns that always compile
fn pattern() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        r"\d+", r"\w*", "a*", "[ab]+", "b?", r"\s", "(a)(b)?", "x|y", "^", "$", r"\b", ".",
    ])
    .prop_map(str::to_string)
}

proptest! {
    /// Without the global flag there is never more than one match
    #[test]
    fn non_global_at_most_one(p in pattern(), subject in "[ab1 x\n]{0,20}") {
        let set = compute_matches(&p, &subject, Flags::none()).unwrap();
        prop_assert!(set.len() <= 1);
    }

    /// Highlights are sorted, disjoint, non-empty, and inside the subject
    #[test]
    fn highlights_sorted_and_disjoint(p in pattern(), subject in "[ab1 xé\n]{0,20}") {
        let set = compute_matches(&p, &subject, Flags::global()).unwrap();
        for h in &set.highlights {
            prop_assert!(h.start < h.end);
            prop_assert!(h.end <= subject.len());
        }
        for pair in set.highlights.windows(2) {
            prop_assert!(pair[0].end <= pair[1].start);
        }
    }

    /// Every match lies inside the subject and is that slice of it
    #[test]
    fn matches_are_subject_slices(p in pattern(), subject in "[ab1 xé]{0,20}") {
        let set = compute_matches(&p, &subject, Flags::global()).unwrap();
        for m in &set.matches {
            prop_assert_eq!(subject.get(m.start..m.end()), Some(m.full_text.as_str()));
        }
    }

    /// A global scan always terminates with at most len + 1 matches
    #[test]
    fn global_scan_bounded(p in pattern(), subject in "[ab1 x]{0,30}") {
        let set = compute_matches(&p, &subject, Flags::global()).unwrap();
        prop_assert!(set.len() <= subject.chars().count() + 1);
    }

    /// Highlight segments rebuild the subject exactly
    #[test]
    fn segments_rebuild_subject(p in pattern(), subject in "[ab1 xé]{0,20}") {
        let set = compute_matches(&p, &subject, Flags::global()).unwrap();
        let rebuilt: String = segments(&subject, &set.highlights).into_iter().map(|(t, _)| t).collect();
        prop_assert_eq!(rebuilt, subject);
    }

    /// Concatenated fragments give back the pattern, for any input
    #[test]
    fn annotate_concatenates_to_input(p in "\\PC{0,40}") {
        let joined: String = annotate(&p).into_iter().map(|f| f.text).collect();
        prop_assert_eq!(joined, p);
    }

    /// No fragment is empty
    #[test]
    fn annotate_fragments_non_empty(p in "[\\\\()\\[\\]{}^$.|*+?a-d]{0,30}") {
        prop_assert!(annotate(&p).iter().all(|f| !f.text.is_empty()));
    }
}
