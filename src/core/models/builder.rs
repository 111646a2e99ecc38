//! Builder palette model

use serde::{Deserialize, Serialize};

/// A token that can be inserted into a pattern
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuilderBlock {
    /// Button label (e.g. "Digit")
    pub label: String,
    /// Text inserted into the pattern (e.g. `\d`)
    pub token: String,
    /// What the token does
    pub description: String,
    /// How far the cursor moves back from the end of the inserted token
    #[serde(default)]
    pub cursor_offset: usize,
}

/// A named group of blocks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuilderCategory {
    /// Category name
    pub name: String,
    /// Blocks in display order
    #[serde(default)]
    pub blocks: Vec<BuilderBlock>,
}

/// The full palette
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuilderPalette {
    /// Categories in display order
    #[serde(rename = "category", default)]
    pub categories: Vec<BuilderCategory>,
}

impl BuilderPalette {
    /// Iterate over every block
    pub fn blocks(&self) -> impl Iterator<Item = &BuilderBlock> {
        self.categories.iter().flat_map(|c| c.blocks.iter())
    }
}
