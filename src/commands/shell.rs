//! Shell command - interactive edit-and-retest loop
//!
//! Reads one command per line from stdin. Every edit re-runs the pattern
//! so the highlights stay current. A failing command prints its error and
//! the loop carries on with the session unchanged.

use std::fs;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::{Path, PathBuf};

use log::debug;

use regex_rocket::adapters::session_file::{self, SESSION_FILE_NAME};
use regex_rocket::catalog;
use regex_rocket::config::Config;
use regex_rocket::core::models::{Flags, Session};
use regex_rocket::core::services::export::{CSV_FILE_NAME, TEXT_FILE_NAME, to_csv, to_text};
use regex_rocket::core::services::{annotate, compute_matches, find_block, insert_token, search, select};
use regex_rocket::output::{ExplainReport, LibraryReport, OperationResult, OutputMode, SessionResult};

use super::match_report;
use crate::cli::ExportFormat;

const HELP: &str = "\
Commands:
  pattern <regex>          set the pattern
  subject <text>           set the subject text
  append <text>            add a line to the subject text
  flags <gim>              set the flags (\"-\" for none)
  toggle <g|i|m>           flip one flag
  test                     run the pattern again
  explain                  token breakdown of the pattern
  library [query]          search the pattern library
  use <entry> [| <var>]    load a library pattern
  insert <block>           insert a builder token at the cursor
  cursor <n>               move the insertion cursor (byte offset)
  export [path]            save the session
  import <path>            load a session
  extract <txt|csv> [path] save the matches
  show                     print the session
  help                     this text
  quit                     leave the shell";

/// One parsed shell line
#[derive(Debug, Clone, PartialEq, Eq)]
enum Line {
    Pattern(String),
    Subject(String),
    Append(String),
    Flags(String),
    Toggle(String),
    Test,
    Explain,
    Library(String),
    Use {
        entry: String,
        variation: Option<String>,
    },
    Insert(String),
    Cursor(String),
    Export(Option<PathBuf>),
    Import(String),
    Extract {
        format: String,
        path: Option<PathBuf>,
    },
    Show,
    Help,
    Quit,
    Blank,
    Unknown(String),
}

impl Line {
    fn parse(raw: &str) -> Self {
        let raw = raw.trim_end_matches(['\n', '\r']);
        let (word, rest) = raw.trim_start().split_once(' ').unwrap_or((raw.trim(), ""));
        let arg = rest.trim();
        let path = (!arg.is_empty()).then(|| PathBuf::from(arg));

        match word {
            "" => Self::Blank,
            // Pattern and subject keep their text as typed
            "pattern" | "regex" => Self::Pattern(rest.to_string()),
            "subject" => Self::Subject(rest.to_string()),
            "append" => Self::Append(rest.to_string()),
            "flags" => Self::Flags(arg.to_string()),
            "toggle" => Self::Toggle(arg.to_string()),
            "test" | "run" => Self::Test,
            "explain" => Self::Explain,
            "library" | "lib" => Self::Library(arg.to_string()),
            "use" => match arg.split_once('|') {
                Some((entry, variation)) => Self::Use {
                    entry: entry.trim().to_string(),
                    variation: Some(variation.trim().to_string()),
                },
                None => Self::Use {
                    entry: arg.to_string(),
                    variation: None,
                },
            },
            "insert" => Self::Insert(arg.to_string()),
            "cursor" => Self::Cursor(arg.to_string()),
            "export" | "save" => Self::Export(path),
            "import" | "load" => Self::Import(arg.to_string()),
            "extract" => {
                let (format, target) = arg.split_once(' ').unwrap_or((arg, ""));
                let target = target.trim();
                Self::Extract {
                    format: format.to_string(),
                    path: (!target.is_empty()).then(|| PathBuf::from(target)),
                }
            },
            "show" => Self::Show,
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            other => Self::Unknown(other.to_string()),
        }
    }
}

/// Interactive session state
#[derive(Debug)]
struct Shell {
    session: Session,
    cursor: usize,
    mode: OutputMode,
}

impl Shell {
    fn new(session: Session, mode: OutputMode) -> Self {
        let cursor = session.state().regex.len();
        Self {
            session,
            cursor,
            mode,
        }
    }

    /// Apply one line; `Ok(false)` ends the loop
    fn handle(&mut self, line: Line) -> anyhow::Result<bool> {
        match line {
            Line::Blank => {},
            Line::Quit => return Ok(false),
            Line::Help => println!("{HELP}"),
            Line::Pattern(pattern) => {
                self.cursor = pattern.len();
                self.session.set_pattern(pattern);
                self.retest();
            },
            Line::Subject(subject) => {
                self.session.set_subject(subject);
                self.retest();
            },
            Line::Append(text) => {
                let mut subject = self.session.state().test_string.clone();
                if !subject.is_empty() {
                    subject.push('\n');
                }
                subject.push_str(&text);
                self.session.set_subject(subject);
                self.retest();
            },
            Line::Flags(compact) => {
                let flags: Flags = if compact == "-" { Flags::none() } else { compact.parse()? };
                self.session.set_flags(flags);
                self.retest();
            },
            Line::Toggle(letters) => {
                let mut flags = self.session.state().flags;
                for letter in letters.chars() {
                    flags.toggle(letter)?;
                }
                self.session.set_flags(flags);
                self.retest();
            },
            Line::Test => self.retest(),
            Line::Explain => ExplainReport {
                pattern: self.session.state().regex.clone(),
                fragments: annotate(&self.session.state().regex),
            }
            .render(self.mode),
            Line::Library(query) => LibraryReport {
                library: search(catalog::library()?, &query),
                query,
            }
            .render(self.mode),
            Line::Use { entry, variation } => {
                let def = select(catalog::library()?, &entry, variation.as_deref())?;
                self.cursor = def.pattern.len();
                self.session.set_pattern(def.pattern.clone());
                self.retest();
            },
            Line::Insert(key) => {
                let block = find_block(catalog::palette()?, &key)
                    .ok_or_else(|| anyhow::anyhow!("No builder block named '{key}'"))?;
                let inserted = insert_token(&self.session.state().regex, self.cursor..self.cursor, block)?;
                self.cursor = inserted.cursor;
                self.session.set_pattern(inserted.pattern);
                self.retest();
            },
            Line::Cursor(offset) => {
                let offset: usize = offset.parse()?;
                self.cursor = offset.min(self.session.state().regex.len());
                println!("cursor: {}", self.cursor);
            },
            Line::Export(path) => {
                let path = path.unwrap_or_else(|| PathBuf::from(SESSION_FILE_NAME));
                session_file::export(&path, self.session.state())?;
                self.show(path.display().to_string());
            },
            Line::Import(path) => {
                // A failed import returns before touching the session
                let state = session_file::import(Path::new(&path))?;
                self.cursor = state.regex.len();
                self.session.replace(state);
                self.show(path);
                self.retest();
            },
            Line::Extract { format, path } => self.extract(&format, path)?,
            Line::Show => self.show("(current)".to_string()),
            Line::Unknown(word) => anyhow::bail!("Unknown command '{word}' (type 'help')"),
        }
        Ok(true)
    }

    fn retest(&self) {
        match_report(self.session.state()).render(self.mode);
    }

    fn show(&self, path: String) {
        SessionResult {
            path,
            state: self.session.state().clone(),
        }
        .render(self.mode);
    }

    fn extract(&self, format: &str, path: Option<PathBuf>) -> anyhow::Result<()> {
        let format = match format {
            "txt" | "" => ExportFormat::Txt,
            "csv" => ExportFormat::Csv,
            other => anyhow::bail!("Unknown export format '{other}' (expected txt or csv)"),
        };

        let state = self.session.state();
        let set = compute_matches(&state.regex, &state.test_string, state.flags)
            .map_err(|e| anyhow::anyhow!("Invalid Regex: {e}"))?;
        if set.is_empty() {
            anyhow::bail!("No matches to extract");
        }

        let (content, default_name) = match format {
            ExportFormat::Txt => (to_text(&set.matches), TEXT_FILE_NAME),
            ExportFormat::Csv => (to_csv(&set.matches), CSV_FILE_NAME),
        };
        let path = path.unwrap_or_else(|| PathBuf::from(default_name));
        fs::write(&path, content)?;

        OperationResult {
            success: true,
            message: format!("Wrote {} matches to {}", set.len(), path.display()),
        }
        .render(self.mode);
        Ok(())
    }
}

/// Run the interactive loop until `quit` or end of input
pub fn shell(mode: OutputMode) -> anyhow::Result<()> {
    let config = Config::load();
    let mut shell = Shell::new(Session::new(config.initial_state()), mode);

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    if interactive {
        println!("regex-rocket shell. Type 'help' for commands.\n");
    }
    shell.retest();

    let mut lines = stdin.lock().lines();
    loop {
        if interactive {
            print!("> ");
            io::stdout().flush()?;
        }
        let Some(raw) = lines.next().transpose()? else {
            break;
        };

        let line = Line::parse(&raw);
        debug!("shell: {line:?}");
        match shell.handle(line) {
            Ok(true) => {},
            Ok(false) => break,
            Err(err) => eprintln!("Error: {err:#}"),
        }
    }
    Ok(())
}
