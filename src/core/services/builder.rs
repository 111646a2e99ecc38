//! Pattern builder - inserts palette tokens into a pattern

use std::ops::Range;

use thiserror::Error;

use crate::core::models::{BuilderBlock, BuilderPalette};

/// Errors inserting a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BuilderError {
    /// The selection splits a multi-byte character
    #[error("selection {start}..{end} does not fall on character boundaries")]
    NotCharBoundary {
        /// Selection start
        start: usize,
        /// Selection end
        end: usize,
    },
}

/// Result of an insertion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Insertion {
    /// The edited pattern
    pub pattern: String,
    /// Cursor position (byte offset) after the insertion
    pub cursor: usize,
}

/// Replace `selection` in `pattern` with `block`'s token
///
/// The cursor lands `cursor_offset` bytes before the end of the inserted
/// token, so `()` leaves it between the parentheses. Selections beyond
/// the end of the pattern are clamped; a reversed selection collapses to
/// its start.
pub fn insert_token(
    pattern: &str,
    selection: Range<usize>,
    block: &BuilderBlock,
) -> Result<Insertion, BuilderError> {
    let start = selection.start.min(pattern.len());
    let end = selection.end.clamp(start, pattern.len());

    if !pattern.is_char_boundary(start) || !pattern.is_char_boundary(end) {
        return Err(BuilderError::NotCharBoundary { start, end });
    }

    let mut edited = String::with_capacity(pattern.len() + block.token.len());
    edited.push_str(&pattern[..start]);
    edited.push_str(&block.token);
    edited.push_str(&pattern[end..]);

    let cursor = start + block.token.len().saturating_sub(block.cursor_offset);
    Ok(Insertion {
        pattern: edited,
        cursor,
    })
}

/// Find a block by label (case-insensitive) or exact token
#[must_use]
pub fn find_block<'a>(palette: &'a BuilderPalette, key: &str) -> Option<&'a BuilderBlock> {
    palette
        .blocks()
        .find(|b| b.label.eq_ignore_ascii_case(key))
        .or_else(|| palette.blocks().find(|b| b.token == key))
}
