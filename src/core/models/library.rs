//! Pattern library model
//!
//! A [`Library`] is a list of named categories. Each entry is either a
//! single pattern or a group of named variations (e.g. per-country phone
//! formats). The two shapes are distinct variants, tagged by `kind`.

use serde::{Deserialize, Serialize};

/// A single named pattern
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternDef {
    /// Display name
    pub name: String,
    /// Pattern text
    pub pattern: String,
    /// What the pattern matches
    pub description: String,
}

/// A named entry whose patterns are selectable variations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariationGroup {
    /// Display name
    pub name: String,
    /// What the entry covers
    pub description: String,
    /// The selectable variations, first one is the default
    pub variations: Vec<PatternDef>,
}

/// One library entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LibraryEntry {
    /// A plain pattern
    Pattern(PatternDef),
    /// A pattern with variations and no pattern of its own
    Variations(VariationGroup),
}

impl LibraryEntry {
    /// Entry name
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Pattern(p) => &p.name,
            Self::Variations(v) => &v.name,
        }
    }

    /// Entry description
    #[must_use]
    pub fn description(&self) -> &str {
        match self {
            Self::Pattern(p) => &p.description,
            Self::Variations(v) => &v.description,
        }
    }

    /// The pattern shown before any variation is chosen
    #[must_use]
    pub fn default_pattern(&self) -> Option<&PatternDef> {
        match self {
            Self::Pattern(p) => Some(p),
            Self::Variations(v) => v.variations.first(),
        }
    }
}

/// A named group of entries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryCategory {
    /// Category name
    pub name: String,
    /// Entries in declaration order
    #[serde(default)]
    pub entries: Vec<LibraryEntry>,
}

/// The whole pattern catalog
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Library {
    /// Categories in declaration order
    #[serde(rename = "category", default)]
    pub categories: Vec<LibraryCategory>,
}

impl Library {
    /// Number of entries across all categories
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.categories.iter().map(|c| c.entries.len()).sum()
    }

    /// Whether the library has no categories
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Iterate over every entry
    pub fn entries(&self) -> impl Iterator<Item = &LibraryEntry> {
        self.categories.iter().flat_map(|c| c.entries.iter())
    }
}
