//! Business logic services
//!
//! Pure logic over domain models. These services have no I/O
//! dependencies - they operate on data passed in and return results.
//!
//! - [`matcher`] - Run a pattern over a subject
//! - [`annotator`] - Break a pattern into explained fragments
//! - [`library`] - Search and select library patterns
//! - [`builder`] - Insert palette tokens into a pattern
//! - [`export`] - Render matches as text or CSV
//! - [`assistant`] - Prompts and reply checks for the generative assistant

pub mod annotator;
pub mod assistant;
pub mod builder;
pub mod export;
pub mod library;
pub mod matcher;

pub use annotator::annotate;
pub use builder::{BuilderError, Insertion, find_block, insert_token};
pub use library::{LibraryError, find_entry, search, select};
pub use matcher::{MatchError, compute_matches};
