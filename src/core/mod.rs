//! Core domain logic for regex-rocket
//!
//! This module contains pure logic with no I/O dependencies.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Flags, MatchSet, TokenFragment, Library, Session)
//! - `services/` - Matching, annotation, library lookup, export
//! - `ports/` - Trait definitions for external dependencies

pub mod models;
pub mod ports;
pub mod services;
