//! Built-in data sets
//!
//! The pattern library and the builder palette ship inside the binary as
//! TOML and are parsed once, on first use.

use std::sync::LazyLock;

use thiserror::Error;

use crate::core::models::{BuilderPalette, Library};

const LIBRARY_TOML: &str = include_str!("library.toml");
const BUILDER_TOML: &str = include_str!("builder.toml");

static LIBRARY: LazyLock<Result<Library, toml::de::Error>> =
    LazyLock::new(|| toml::from_str(LIBRARY_TOML));

static PALETTE: LazyLock<Result<BuilderPalette, toml::de::Error>> =
    LazyLock::new(|| toml::from_str(BUILDER_TOML));

/// An embedded data set failed to parse
#[derive(Debug, Clone, Error)]
#[error("built-in {name} is malformed: {message}")]
pub struct CatalogError {
    /// Which data set
    pub name: &'static str,
    /// Parser diagnostic
    pub message: String,
}

/// The built-in pattern library
pub fn library() -> Result<&'static Library, CatalogError> {
    LIBRARY.as_ref().map_err(|e| CatalogError {
        name: "pattern library",
        message: e.to_string(),
    })
}

/// The built-in builder palette
pub fn palette() -> Result<&'static BuilderPalette, CatalogError> {
    PALETTE.as_ref().map_err(|e| CatalogError {
        name: "builder palette",
        message: e.to_string(),
    })
}
