//! Extract command - export the matches of a pattern

use std::fs;

use regex_rocket::config::Config;
use regex_rocket::core::services::compute_matches;
use regex_rocket::core::services::export::{CSV_FILE_NAME, TEXT_FILE_NAME, to_csv, to_text};
use regex_rocket::output::{OperationResult, OutputMode};

use super::input;
use crate::cli::{ExportFormat, MatchArgs};

/// Run a pattern and write its matches as text or CSV
///
/// Refuses when the pattern is invalid or found nothing.
pub fn extract(
    args: &MatchArgs,
    format: ExportFormat,
    output: Option<&str>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let config = Config::load();
    let state = input::resolve(args, &config)?;

    let set = compute_matches(&state.regex, &state.test_string, state.flags)
        .map_err(|e| anyhow::anyhow!("Invalid Regex: {e}"))?;
    if set.is_empty() {
        anyhow::bail!("No matches to extract");
    }

    let (content, default_name) = match format {
        ExportFormat::Txt => (to_text(&set.matches), TEXT_FILE_NAME),
        ExportFormat::Csv => (to_csv(&set.matches), CSV_FILE_NAME),
    };

    let target = output.unwrap_or(default_name);
    if target == "-" {
        println!("{content}");
        return Ok(());
    }

    fs::write(target, content)?;
    OperationResult {
        success: true,
        message: format!("Wrote {} matches to {target}", set.len()),
    }
    .render(mode);
    Ok(())
}
