//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::commands;
use regex_rocket::output::OutputMode;

/// regex-rocket - Author and test regular expressions
#[derive(Parser, Debug)]
#[command(
    name = "regex-rocket",
    version,
    about = "Author, test, and explain regular expressions",
    long_about = "Author, test, and explain regular expressions.\n\n\
                  Run a pattern over sample text, see what each token means,\n\
                  borrow from the pattern library, and export matches or sessions."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Where a match run gets its pattern, subject, and flags
#[derive(Args, Debug, Clone, Default)]
pub struct MatchArgs {
    /// Pattern to run (taken from --session when omitted)
    pub pattern: Option<String>,

    /// Subject text
    #[arg(short, long, conflicts_with = "subject_file")]
    pub subject: Option<String>,

    /// Read the subject text from a file
    #[arg(short = 'f', long)]
    pub subject_file: Option<PathBuf>,

    /// Flags in compact form, e.g. "gi" (empty for none)
    #[arg(long)]
    pub flags: Option<String>,

    /// Session file supplying any value not given on the command line
    #[arg(long)]
    pub session: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run a pattern over subject text and show the matches
    Test {
        #[command(flatten)]
        input: MatchArgs,
    },

    /// Break a pattern into tokens and describe each one
    Explain {
        /// Pattern to explain
        pattern: String,
    },

    /// Browse the pattern library
    Library {
        #[command(subcommand)]
        action: LibraryAction,
    },

    /// Pattern builder blocks
    Blocks {
        #[command(subcommand)]
        action: BlocksAction,
    },

    /// Export the matches of a pattern as text or CSV
    Extract {
        #[command(flatten)]
        input: MatchArgs,

        /// Export format
        #[arg(long, value_enum, default_value_t = ExportFormat::Txt)]
        format: ExportFormat,

        /// Output file ("-" for stdout); defaults to matches.txt / matches.csv
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Save or load a session file
    Session {
        #[command(subcommand)]
        action: SessionAction,
    },

    /// Ask the generative assistant
    #[cfg(feature = "llm")]
    Ai {
        #[command(subcommand)]
        action: AiAction,
    },

    /// Interactive edit-and-retest loop
    Shell,

    /// Show or create the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Show version
    Version,
}

#[derive(Subcommand, Debug)]
pub enum LibraryAction {
    /// List library entries, optionally filtered
    List {
        /// Case-insensitive search over names, descriptions, and patterns
        query: Option<String>,
    },

    /// Print one pattern from the library
    Get {
        /// Entry name
        name: String,

        /// Variation name (defaults to the first one)
        #[arg(long)]
        variation: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum BlocksAction {
    /// List builder blocks
    List,

    /// Insert a block's token into a pattern
    Insert {
        /// Pattern to edit
        pattern: String,

        /// Block label (e.g. "Digit") or token (e.g. "\d")
        block: String,

        /// Byte offset to insert at (defaults to the end)
        #[arg(long)]
        at: Option<usize>,

        /// End of a selection to replace, starting at --at
        #[arg(long)]
        select_end: Option<usize>,
    },
}

#[derive(Subcommand, Debug)]
pub enum SessionAction {
    /// Write a session file
    Export {
        #[command(flatten)]
        input: MatchArgs,

        /// Output file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Read a session file and show its contents
    Import {
        /// Session file
        path: PathBuf,
    },
}

#[cfg(feature = "llm")]
#[derive(Subcommand, Debug)]
pub enum AiAction {
    /// Generate a pattern from a description
    Generate {
        /// What the pattern should match
        description: String,

        /// Store the pattern in this session file
        #[arg(long)]
        session: Option<PathBuf>,
    },

    /// Explain a pattern in plain language
    Explain {
        /// Pattern to explain
        pattern: String,
    },

    /// Generate sample subject text for a pattern
    Sample {
        /// Pattern to generate text for
        #[arg(required_unless_present = "session")]
        pattern: Option<String>,

        /// Use this session's pattern and store the text as its subject
        #[arg(long, conflicts_with = "pattern")]
        session: Option<PathBuf>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Write a config file with default values
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

/// Match export format
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// One full match per line
    Txt,
    /// Full match and capture groups, quoted
    Csv,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Test { input }) => commands::test(&input, output_mode),
        Some(Command::Explain { pattern }) => {
            commands::explain(&pattern, output_mode);
            Ok(())
        },
        Some(Command::Library { action }) => commands::library_cmd(action, output_mode),
        Some(Command::Blocks { action }) => commands::blocks_cmd(action, output_mode),
        Some(Command::Extract {
            input,
            format,
            output,
        }) => commands::extract(&input, format, output.as_deref(), output_mode),
        Some(Command::Session { action }) => commands::session_cmd(action, output_mode),
        #[cfg(feature = "llm")]
        Some(Command::Ai { action }) => commands::ai_cmd(action, output_mode),
        Some(Command::Shell) => commands::shell(output_mode),
        Some(Command::Config { action }) => commands::config_cmd(action, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("regex-rocket v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("regex-rocket v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'regex-rocket --help' for usage");
                println!("Run 'regex-rocket shell' to start an interactive session");
            }
            Ok(())
        },
    }
}
