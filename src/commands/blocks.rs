//! Blocks command - the pattern builder palette

use regex_rocket::catalog;
use regex_rocket::core::services::{find_block, insert_token};
use regex_rocket::output::{InsertResult, OutputMode, PaletteReport};

use crate::cli::BlocksAction;

/// Handle builder subcommands
pub fn blocks_cmd(action: BlocksAction, mode: OutputMode) -> anyhow::Result<()> {
    let palette = catalog::palette()?;

    match action {
        BlocksAction::List => PaletteReport {
            palette: palette.clone(),
        }
        .render(mode),
        BlocksAction::Insert {
            pattern,
            block,
            at,
            select_end,
        } => {
            let found = find_block(palette, &block)
                .ok_or_else(|| anyhow::anyhow!("No builder block named '{block}'"))?;
            let start = at.unwrap_or(pattern.len());
            let end = select_end.unwrap_or(start);
            let inserted = insert_token(&pattern, start..end, found)?;
            InsertResult {
                pattern: inserted.pattern,
                cursor: inserted.cursor,
            }
            .render(mode);
        },
    }
    Ok(())
}
