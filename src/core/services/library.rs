//! Pattern library lookup
//!
//! Filtering and selection over a [`Library`]. No ranking: results keep
//! the order the library declares.

use thiserror::Error;

use crate::core::models::{Library, LibraryCategory, LibraryEntry, PatternDef};

/// Errors selecting a library pattern
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LibraryError {
    /// No entry has this name
    #[error("no library entry named '{0}'")]
    UnknownEntry(String),

    /// The entry has no variation with this name
    #[error("entry '{entry}' has no variation named '{variation}' (available: {available})")]
    UnknownVariation {
        /// Entry name
        entry: String,
        /// Requested variation
        variation: String,
        /// Comma-separated variation names
        available: String,
    },

    /// A variation was requested from an entry that has none
    #[error("entry '{0}' has no variations")]
    NoVariations(String),

    /// A variation-bearing entry with an empty variation list
    #[error("entry '{0}' has an empty variation list")]
    EmptyVariations(String),
}

/// Filter `library` by a case-insensitive substring query
///
/// Matches entry name and description, plus the pattern text of simple
/// entries or the name, description and pattern of every variation.
/// Categories with no surviving entries are dropped; an empty query
/// returns the library unchanged.
#[must_use]
pub fn search(library: &Library, query: &str) -> Library {
    if query.is_empty() {
        return library.clone();
    }

    let needle = query.to_lowercase();
    let categories = library
        .categories
        .iter()
        .filter_map(|category| {
            let entries: Vec<LibraryEntry> = category
                .entries
                .iter()
                .filter(|entry| entry_matches(entry, &needle))
                .cloned()
                .collect();
            (!entries.is_empty()).then(|| LibraryCategory {
                name: category.name.clone(),
                entries,
            })
        })
        .collect();

    Library { categories }
}

fn entry_matches(entry: &LibraryEntry, needle: &str) -> bool {
    let contains = |s: &str| s.to_lowercase().contains(needle);

    if contains(entry.name()) || contains(entry.description()) {
        return true;
    }

    match entry {
        LibraryEntry::Pattern(p) => contains(&p.pattern),
        LibraryEntry::Variations(group) => group
            .variations
            .iter()
            .any(|v| contains(&v.name) || contains(&v.description) || contains(&v.pattern)),
    }
}

/// Find an entry by case-insensitive name
#[must_use]
pub fn find_entry<'a>(library: &'a Library, name: &str) -> Option<&'a LibraryEntry> {
    library.entries().find(|e| e.name().eq_ignore_ascii_case(name))
}

/// Pick the pattern to use from an entry
///
/// Variation-bearing entries default to their first variation when
/// `variation` is `None`.
pub fn select<'a>(
    library: &'a Library,
    name: &str,
    variation: Option<&str>,
) -> Result<&'a PatternDef, LibraryError> {
    let entry = find_entry(library, name).ok_or_else(|| LibraryError::UnknownEntry(name.to_string()))?;

    match (entry, variation) {
        (LibraryEntry::Pattern(p), None) => Ok(p),
        (LibraryEntry::Pattern(p), Some(_)) => Err(LibraryError::NoVariations(p.name.clone())),
        (LibraryEntry::Variations(group), None) => group
            .variations
            .first()
            .ok_or_else(|| LibraryError::EmptyVariations(group.name.clone())),
        (LibraryEntry::Variations(group), Some(wanted)) => group
            .variations
            .iter()
            .find(|v| v.name.eq_ignore_ascii_case(wanted))
            .ok_or_else(|| LibraryError::UnknownVariation {
                entry: group.name.clone(),
                variation: wanted.to_string(),
                available: group
                    .variations
                    .iter()
                    .map(|v| v.name.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            }),
    }
}
