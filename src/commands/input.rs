//! Resolve pattern, subject, and flags for a match run

use std::fs;
use std::io::{self, IsTerminal, Read};

use anyhow::Context;
use log::debug;

use regex_rocket::adapters::session_file;
use regex_rocket::config::Config;
use regex_rocket::core::models::SessionState;

use crate::cli::MatchArgs;

/// Combine command-line values with the session file and config defaults
///
/// Command-line values win. The subject falls back to the session file,
/// then to stdin when stdin is not a terminal.
pub fn resolve(args: &MatchArgs, config: &Config) -> anyhow::Result<SessionState> {
    let base = match &args.session {
        Some(path) => session_file::import(path)?,
        None => {
            if args.pattern.is_none() {
                anyhow::bail!("No pattern given (pass PATTERN or --session FILE)");
            }
            SessionState::new("", "", config.default_flags())
        },
    };

    let regex = args.pattern.clone().unwrap_or(base.regex);

    let test_string = if let Some(subject) = &args.subject {
        subject.clone()
    } else if let Some(path) = &args.subject_file {
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?
    } else if args.session.is_some() {
        base.test_string
    } else {
        read_stdin()?
    };

    let flags = match &args.flags {
        Some(compact) => compact.parse()?,
        None => base.flags,
    };

    Ok(SessionState::new(regex, test_string, flags))
}

fn read_stdin() -> anyhow::Result<String> {
    let mut stdin = io::stdin();
    if stdin.is_terminal() {
        return Ok(String::new());
    }
    let mut text = String::new();
    stdin.read_to_string(&mut text)?;
    debug!("Read {} bytes of subject text from stdin", text.len());
    Ok(text)
}
