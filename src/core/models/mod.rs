//! Domain models for regex-rocket
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Flags`] - Matching mode switches (`g`, `i`, `m`)
//! - [`MatchSet`] - Matches and highlight spans from one run
//! - [`TokenFragment`] - A classified piece of a pattern
//! - [`Library`] - The curated pattern catalog
//! - [`BuilderPalette`] - Insertable pattern tokens
//! - [`Session`] - Pattern, subject and flags being edited

mod builder;
mod flags;
mod library;
mod match_record;
mod session;
mod token;

pub use builder::{BuilderBlock, BuilderCategory, BuilderPalette};
pub use flags::{Flags, FlagsError};
pub use library::{Library, LibraryCategory, LibraryEntry, PatternDef, VariationGroup};
pub use match_record::{Highlight, MatchRecord, MatchSet};
pub use session::{AssistTicket, Session, SessionState, StaleResponse};
pub use token::{TokenCategory, TokenFragment};
