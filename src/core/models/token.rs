//! Classified pieces of a pattern, for the explanation view

use serde::{Deserialize, Serialize};

/// Kind of pattern fragment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenCategory {
    /// Text matched as-is
    Literal,
    /// Escaped shorthand such as `\d` or `\b`
    CharacterClass,
    /// A parenthesized span
    Group,
    /// A bracketed span such as `[a-z]`
    CharacterSet,
    /// A brace quantifier such as `{2,4}`
    QuantifierRange,
    /// Single-character anchor or metacharacter
    AnchorOrMeta,
}

impl std::fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Literal => write!(f, "Literal"),
            Self::CharacterClass => write!(f, "Character Class"),
            Self::Group => write!(f, "Group"),
            Self::CharacterSet => write!(f, "Character Set"),
            Self::QuantifierRange => write!(f, "Quantifier"),
            Self::AnchorOrMeta => write!(f, "Anchor/Meta"),
        }
    }
}

/// One classified piece of a pattern
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenFragment {
    /// The exact substring of the pattern
    pub text: String,
    /// What kind of token this is
    pub category: TokenCategory,
    /// Human-readable explanation
    pub description: String,
}
