//! Command implementations

#[cfg(feature = "llm")]
mod ai;
mod blocks;
mod config;
mod explain;
mod extract;
mod input;
mod library;
mod session;
mod shell;

#[cfg(feature = "llm")]
pub use ai::ai_cmd;
pub use blocks::blocks_cmd;
pub use config::config_cmd;
pub use explain::explain;
pub use extract::extract;
pub use library::library_cmd;
pub use session::session_cmd;
pub use shell::shell;
pub use test::{match_report, test};
