//! Token annotator - splits a pattern into labeled fragments for display
//!
//! This is a lexical heuristic, not a parser. At each position an ordered
//! list of recognizer rules is tried and the first one that matches wins;
//! characters no rule claims are gathered into literal runs.
//!
//! Groups and character sets are recognized greedily up to the last
//! closing bracket on the line, so nested constructs come out as one
//! opaque fragment.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::models::{TokenCategory, TokenFragment};

/// Recognizer rules in priority order, each anchored at the scan position
static RULES: LazyLock<Vec<(TokenCategory, Regex)>> = LazyLock::new(|| {
    [
        (TokenCategory::CharacterClass, r"\A\\[dDwWsSbBtrn]"),
        (TokenCategory::Group, r"\A\(.*\)"),
        (TokenCategory::CharacterSet, r"\A\[.*\]"),
        (TokenCategory::QuantifierRange, r"\A\{.*?\}"),
        (TokenCategory::AnchorOrMeta, r"\A[\^$.|*+?]"),
    ]
    .into_iter()
    .map(|(category, rule)| (category, Regex::new(rule).expect("token rules are valid regexes")))
    .collect()
});

/// Descriptions for tokens whose text never varies
const TOKEN_DESCRIPTIONS: &[(&str, &str)] = &[
    (r"\d", "Matches any digit (0-9)."),
    (r"\D", "Matches any character that is not a digit."),
    (r"\w", "Matches any word character (alphanumeric + underscore)."),
    (r"\W", "Matches any non-word character."),
    (r"\s", "Matches any whitespace character."),
    (r"\S", "Matches any non-whitespace character."),
    (r"\b", "Asserts a word boundary."),
    (r"\B", "Asserts a non-word boundary."),
    (r"\t", "Matches a tab character."),
    (r"\r", "Matches a carriage return."),
    (r"\n", "Matches a newline."),
    (".", "Matches any character except newline."),
    ("^", "Asserts position at the start of the string."),
    ("$", "Asserts position at the end of the string."),
    ("*", "Quantifier: Matches the preceding token 0 or more times."),
    ("+", "Quantifier: Matches the preceding token 1 or more times."),
    ("?", "Quantifier: Matches the preceding token 0 or 1 time."),
    ("|", "Acts as a boolean OR, matching the expression before or after it."),
];

/// Split `pattern` into classified fragments
///
/// Never fails: malformed patterns still produce fragments. Concatenating
/// the `text` of every fragment gives back `pattern` exactly.
///
/// # Examples
///
/// ```
/// use regex_rocket::core::models::TokenCategory;
/// use regex_rocket::core::services::annotate;
///
/// let fragments = annotate(r"^\d{3}");
/// let categories: Vec<_> = fragments.iter().map(|f| f.category).collect();
/// assert_eq!(
///     categories,
///     vec![
///         TokenCategory::AnchorOrMeta,
///         TokenCategory::CharacterClass,
///         TokenCategory::QuantifierRange,
///     ]
/// );
/// ```
#[must_use]
pub fn annotate(pattern: &str) -> Vec<TokenFragment> {
    let mut fragments = Vec::new();
    let mut literal_start = 0;
    let mut pos = 0;

    while pos < pattern.len() {
        let rest = &pattern[pos..];
        let recognized = RULES
            .iter()
            .find_map(|(category, rule)| rule.find(rest).map(|m| (*category, m.end())));

        if let Some((category, len)) = recognized {
            if literal_start < pos {
                fragments.push(fragment(&pattern[literal_start..pos], TokenCategory::Literal));
            }
            fragments.push(fragment(&rest[..len], category));
            pos += len;
            literal_start = pos;
        } else {
            pos += rest.chars().next().map_or(1, char::len_utf8);
        }
    }

    if literal_start < pattern.len() {
        fragments.push(fragment(&pattern[literal_start..], TokenCategory::Literal));
    }

    fragments
}

fn fragment(text: &str, category: TokenCategory) -> TokenFragment {
    TokenFragment {
        text: text.to_string(),
        category,
        description: describe(text, category),
    }
}

fn describe(text: &str, category: TokenCategory) -> String {
    match category {
        TokenCategory::Group => {
            "Capturing Group: Matches the expression inside the parentheses.".to_string()
        },
        TokenCategory::CharacterSet => {
            "Character Set: Matches any single character inside the brackets.".to_string()
        },
        TokenCategory::QuantifierRange => {
            "Quantifier: Specifies the number of repetitions.".to_string()
        },
        _ => TOKEN_DESCRIPTIONS
            .iter()
            .find(|(token, _)| *token == text)
            .map_or_else(|| format!("Literal characters: \"{text}\""), |(_, d)| (*d).to_string()),
    }
}
