//! Adapter implementations for port traits and file formats
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `session_file/` - JSON session export and import
//! - `gemini/` - Gemini HTTP client for the assistant port (feature `llm`)

#[cfg(feature = "llm")]
pub mod gemini;
pub mod session_file;
