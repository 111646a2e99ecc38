//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::core::models::{
    BuilderPalette, Highlight, Library, LibraryEntry, MatchRecord, SessionState, TokenFragment,
};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

fn print_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

/// Split `subject` into `(text, highlighted)` segments
///
/// Spans must be sorted and disjoint, as a match run produces them.
/// Spans that fall outside the subject or off a char boundary are skipped.
#[must_use]
pub fn segments<'a>(subject: &'a str, highlights: &[Highlight]) -> Vec<(&'a str, bool)> {
    let mut parts = Vec::new();
    let mut last = 0;

    for span in highlights {
        if span.start < last || subject.get(span.start..span.end).is_none() {
            continue;
        }
        if span.start > last {
            parts.push((&subject[last..span.start], false));
        }
        parts.push((&subject[span.start..span.end], true));
        last = span.end;
    }

    if last < subject.len() {
        parts.push((&subject[last..], false));
    }
    parts
}

/// Result of running a pattern over a subject
#[derive(Debug, Serialize)]
pub struct MatchReport {
    /// Pattern that was run
    pub pattern: String,
    /// Subject text
    pub subject: String,
    /// Flags in compact form
    pub flags: String,
    /// Matches in subject order
    pub matches: Vec<MatchRecord>,
    /// Highlighted spans
    pub highlights: Vec<Highlight>,
    /// Engine diagnostic when the pattern is invalid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl MatchReport {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        println!("/{}/{}\n", self.pattern, self.flags);

        if let Some(error) = &self.error {
            println!("{} {}", "Invalid Regex:".red().bold(), error);
            return;
        }

        println!("Match Highlights:");
        if self.subject.is_empty() {
            println!("  (empty subject)");
        } else {
            let rendered: String = segments(&self.subject, &self.highlights)
                .into_iter()
                .map(|(text, hit)| {
                    if hit {
                        text.black().on_yellow().to_string()
                    } else {
                        text.to_string()
                    }
                })
                .collect();
            println!("{rendered}");
        }

        println!("\nMatch Information ({} found)", self.matches.len());
        if self.matches.is_empty() {
            println!("  No matches found.");
            return;
        }

        for (i, m) in self.matches.iter().enumerate() {
            let text = if m.is_empty() { "(empty match)" } else { m.full_text.as_str() };
            println!("  {} {}", format!("Match {}:", i + 1).green().bold(), text.yellow());
            println!("    Index: {}, Length: {}", m.start, m.len());
            if !m.groups.is_empty() {
                println!("    Capture Groups:");
                for (g, group) in m.groups.iter().enumerate() {
                    let shown = match group.as_deref() {
                        None => "(absent)",
                        Some("") => "(empty match)",
                        Some(text) => text,
                    };
                    println!("      {} {}", format!("Group {}:", g + 1).purple(), shown);
                }
            }
        }
    }
}

/// Token breakdown of a pattern
#[derive(Debug, Serialize)]
pub struct ExplainReport {
    /// Pattern that was explained
    pub pattern: String,
    /// Fragments in pattern order
    pub fragments: Vec<TokenFragment>,
}

impl ExplainReport {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                if self.fragments.is_empty() {
                    println!("Your regex breakdown will appear here.");
                    return;
                }
                for f in &self.fragments {
                    println!("  {:<16} {}  {}", f.category.to_string(), f.text.yellow(), f.description);
                }
            },
            OutputMode::Json => print_json(self),
        }
    }
}

/// Library listing (possibly filtered)
#[derive(Debug, Serialize)]
pub struct LibraryReport {
    /// Search query, empty for the full library
    pub query: String,
    /// Matching categories
    pub library: Library,
}

impl LibraryReport {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        if self.library.is_empty() {
            println!("No patterns found for \"{}\"", self.query);
            return;
        }

        for category in &self.library.categories {
            println!("{}", category.name.bold());
            for entry in &category.entries {
                println!("  {}", entry.name().blue());
                println!("    {}", entry.description());
                match entry {
                    LibraryEntry::Pattern(p) => println!("    {}", p.pattern.yellow()),
                    LibraryEntry::Variations(group) => {
                        for v in &group.variations {
                            println!("    - {}: {}", v.name, v.pattern.yellow());
                        }
                    },
                }
            }
            println!();
        }
    }
}

/// A single selected library pattern
#[derive(Debug, Serialize)]
pub struct PatternResult {
    /// Entry name
    pub entry: String,
    /// Variation name, when the entry has variations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variation: Option<String>,
    /// Pattern text
    pub pattern: String,
    /// Description
    pub description: String,
}

impl PatternResult {
    /// Render the result based on output mode
    ///
    /// Human mode prints only the pattern so it can be piped.
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.pattern),
            OutputMode::Json => print_json(self),
        }
    }
}

/// Builder palette listing
#[derive(Debug, Serialize)]
pub struct PaletteReport {
    /// The palette
    pub palette: BuilderPalette,
}

impl PaletteReport {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                for category in &self.palette.categories {
                    println!("{}", category.name.bold());
                    for b in &category.blocks {
                        println!("  {:<8} {:<22} {}", b.token.green(), b.label, b.description);
                    }
                    println!();
                }
            },
            OutputMode::Json => print_json(self),
        }
    }
}

/// Result of inserting a builder token
#[derive(Debug, Serialize)]
pub struct InsertResult {
    /// Edited pattern
    pub pattern: String,
    /// Cursor byte offset after insertion
    pub cursor: usize,
}

impl InsertResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                println!("{}", self.pattern);
                println!("cursor: {}", self.cursor);
            },
            OutputMode::Json => print_json(self),
        }
    }
}

/// A session that was imported or exported
#[derive(Debug, Serialize)]
pub struct SessionResult {
    /// File involved
    pub path: String,
    /// The session contents
    pub state: SessionState,
}

impl SessionResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                println!("Session: {}", self.path);
                println!("  regex:      /{}/{}", self.state.regex, self.state.flags);
                println!("  testString: {:?}", self.state.test_string);
            },
            OutputMode::Json => print_json(self),
        }
    }
}

/// Text produced by the generative assistant
#[derive(Debug, Serialize)]
pub struct AssistResult {
    /// Which request ("pattern", "explanation", "sample")
    pub kind: String,
    /// Reply text
    pub text: String,
}

impl AssistResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.text),
            OutputMode::Json => print_json(self),
        }
    }
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => print_json(self),
        }
    }
}
