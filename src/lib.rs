//! regex-rocket - An interactive tool for authoring and testing regular expressions
//!
//! This library provides the pieces behind the CLI: running a pattern over
//! sample text with highlight spans, breaking a pattern into explained
//! tokens, a searchable pattern library, session import/export, and a
//! port for a generative assistant.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod assist;
pub mod catalog;
pub mod config;
pub mod core;
pub mod output;
pub mod paths;
