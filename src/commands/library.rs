//! Library command - browse and pick library patterns

use regex_rocket::catalog;
use regex_rocket::core::models::LibraryEntry;
use regex_rocket::core::services::{find_entry, search, select};
use regex_rocket::output::{LibraryReport, OutputMode, PatternResult};

use crate::cli::LibraryAction;

/// Handle library subcommands
pub fn library_cmd(action: LibraryAction, mode: OutputMode) -> anyhow::Result<()> {
    let library = catalog::library()?;

    match action {
        LibraryAction::List { query } => {
            let query = query.unwrap_or_default();
            LibraryReport {
                library: search(library, &query),
                query,
            }
            .render(mode);
        },
        LibraryAction::Get { name, variation } => {
            let def = select(library, &name, variation.as_deref())?;
            let entry = find_entry(library, &name);
            let variation = match entry {
                Some(LibraryEntry::Variations(_)) => Some(def.name.clone()),
                _ => None,
            };
            PatternResult {
                entry: entry.map_or(name, |e| e.name().to_string()),
                variation,
                pattern: def.pattern.clone(),
                description: def.description.clone(),
            }
            .render(mode);
        },
    }
    Ok(())
}
