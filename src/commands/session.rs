//! Session command - save and load session files

use std::path::PathBuf;

use regex_rocket::adapters::session_file::{self, SESSION_FILE_NAME};
use regex_rocket::config::Config;
use regex_rocket::output::{OutputMode, SessionResult};

use super::input;
use crate::cli::SessionAction;

/// Handle session subcommands
pub fn session_cmd(action: SessionAction, mode: OutputMode) -> anyhow::Result<()> {
    match action {
        SessionAction::Export { input: args, output } => {
            let config = Config::load();
            let state = input::resolve(&args, &config)?;
            let path = output.unwrap_or_else(|| PathBuf::from(SESSION_FILE_NAME));
            session_file::export(&path, &state)?;
            SessionResult {
                path: path.display().to_string(),
                state,
            }
            .render(mode);
        },
        SessionAction::Import { path } => {
            let state = session_file::import(&path)?;
            SessionResult {
                path: path.display().to_string(),
                state,
            }
            .render(mode);
        },
    }
    Ok(())
}
