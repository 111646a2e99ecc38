//! Assistant requests applied to a session file
//!
//! The file may be edited while a request is in flight. The file is read
//! again when the reply arrives; if it changed, the reply is discarded
//! instead of overwriting the newer edit.

use std::path::Path;

use log::{debug, warn};

use crate::adapters::session_file;
use crate::core::models::{AssistTicket, Session, SessionState, StaleResponse};
use crate::core::ports::Assistant;

/// What happened to an assistant reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Applied {
    /// The reply was written to the session file
    Written(SessionState),
    /// The session file changed first, so the reply was dropped
    Stale(StaleResponse),
}

/// Which part of the session a reply replaces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    Pattern,
    Subject,
}

/// Generate sample text for the session's pattern and store it as the subject
pub async fn sample_into<A: Assistant + Sync>(assistant: &A, path: &Path) -> anyhow::Result<Applied> {
    let session = Session::new(session_file::import(path)?);
    if session.state().regex.is_empty() {
        anyhow::bail!("Session {} has no pattern to generate text for", path.display());
    }
    let ticket = session.ticket();
    let reply = assistant.generate_sample_text(&session.state().regex).await?;
    finish(session, ticket, reply, path, Target::Subject)
}

/// Generate a pattern from `description` and store it in the session
pub async fn pattern_into<A: Assistant + Sync>(
    assistant: &A,
    description: &str,
    path: &Path,
) -> anyhow::Result<Applied> {
    let session = Session::new(session_file::import(path)?);
    let ticket = session.ticket();
    let reply = assistant.generate_pattern(description).await?;
    finish(session, ticket, reply, path, Target::Pattern)
}

fn finish(
    mut session: Session,
    ticket: AssistTicket,
    reply: String,
    path: &Path,
    target: Target,
) -> anyhow::Result<Applied> {
    let latest = session_file::import(path)?;
    if latest != *session.state() {
        debug!("Session {} changed during the request", path.display());
        session.replace(latest);
    }

    let result = match target {
        Target::Pattern => session.apply_pattern(ticket, reply),
        Target::Subject => session.apply_sample(ticket, reply),
    };

    match result {
        Ok(()) => {
            session_file::export(path, session.state())?;
            Ok(Applied::Written(session.state().clone()))
        },
        Err(stale) => {
            warn!("{stale}");
            Ok(Applied::Stale(stale))
        },
    }
}
