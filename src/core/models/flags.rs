//! Matching mode flags
//!
//! Three independent switches, written compactly as `"gim"`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error parsing a compact flag string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown flag '{0}' (expected any of: g, i, m)")]
pub struct FlagsError(pub char);

/// Mode flags for a match run
///
/// Any combination is legal. Serializes as `{ "g": .., "i": .., "m": .. }`,
/// the shape used by session files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Flags {
    /// Find every non-overlapping match instead of the first one
    #[serde(rename = "g", default)]
    pub global: bool,
    /// Ignore letter case
    #[serde(rename = "i", default)]
    pub case_insensitive: bool,
    /// `^` and `$` match at line boundaries
    #[serde(rename = "m", default)]
    pub multiline: bool,
}

impl Flags {
    /// No flags set
    #[must_use]
    pub const fn none() -> Self {
        Self {
            global: false,
            case_insensitive: false,
            multiline: false,
        }
    }

    /// Only the global flag set
    #[must_use]
    pub const fn global() -> Self {
        Self {
            global: true,
            case_insensitive: false,
            multiline: false,
        }
    }

    /// Flags understood by the matching engine itself.
    ///
    /// `g` is not an engine flag; the scan loop implements it.
    #[must_use]
    pub fn engine_flags(self) -> String {
        let mut out = String::new();
        if self.case_insensitive {
            out.push('i');
        }
        if self.multiline {
            out.push('m');
        }
        out
    }

    /// Toggle a single flag by its letter
    pub fn toggle(&mut self, letter: char) -> Result<(), FlagsError> {
        match letter {
            'g' => self.global = !self.global,
            'i' => self.case_insensitive = !self.case_insensitive,
            'm' => self.multiline = !self.multiline,
            other => return Err(FlagsError(other)),
        }
        Ok(())
    }
}

impl std::fmt::Display for Flags {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.global {
            write!(f, "g")?;
        }
        if self.case_insensitive {
            write!(f, "i")?;
        }
        if self.multiline {
            write!(f, "m")?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Flags {
    type Err = FlagsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut flags = Self::none();
        for c in s.chars() {
            match c {
                'g' => flags.global = true,
                'i' => flags.case_insensitive = true,
                'm' => flags.multiline = true,
                other => return Err(FlagsError(other)),
            }
        }
        Ok(flags)
    }
}
