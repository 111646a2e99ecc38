//! AI command - ask the generative assistant

use regex_rocket::adapters::gemini::GeminiAssistant;
use regex_rocket::assist::{self, Applied};
use regex_rocket::config::Config;
use regex_rocket::core::ports::{Assistant, AssistantError};
use regex_rocket::output::{AssistResult, OperationResult, OutputMode, SessionResult};

use crate::cli::AiAction;

/// Handle assistant subcommands
///
/// Assistant failures print their `Error: ...` message as-is and exit 1.
pub fn ai_cmd(action: AiAction, mode: OutputMode) -> anyhow::Result<()> {
    let config = Config::load();
    let assistant = GeminiAssistant::from_config(&config.assistant)?;
    let runtime = tokio::runtime::Runtime::new()?;

    match runtime.block_on(run(&assistant, action, mode)) {
        Err(err) if err.downcast_ref::<AssistantError>().is_some() => {
            eprintln!("{err}");
            std::process::exit(1);
        },
        other => other,
    }
}

async fn run<A: Assistant + Sync>(assistant: &A, action: AiAction, mode: OutputMode) -> anyhow::Result<()> {
    match action {
        AiAction::Generate {
            description,
            session: Some(path),
        } => {
            let applied = assist::pattern_into(assistant, &description, &path).await?;
            report(applied, &path.display().to_string(), mode);
        },
        AiAction::Generate {
            description,
            session: None,
        } => {
            let text = assistant.generate_pattern(&description).await?;
            AssistResult {
                kind: "pattern".to_string(),
                text,
            }
            .render(mode);
        },
        AiAction::Explain { pattern } => {
            let text = assistant.explain_pattern(&pattern).await?;
            AssistResult {
                kind: "explanation".to_string(),
                text,
            }
            .render(mode);
        },
        AiAction::Sample {
            session: Some(path), ..
        } => {
            let applied = assist::sample_into(assistant, &path).await?;
            report(applied, &path.display().to_string(), mode);
        },
        AiAction::Sample {
            pattern: Some(pattern),
            session: None,
        } => {
            let text = assistant.generate_sample_text(&pattern).await?;
            AssistResult {
                kind: "sample".to_string(),
                text,
            }
            .render(mode);
        },
        AiAction::Sample {
            pattern: None,
            session: None,
        } => anyhow::bail!("Give a PATTERN or --session FILE"),
    }
    Ok(())
}

fn report(applied: Applied, path: &str, mode: OutputMode) {
    match applied {
        Applied::Written(state) => SessionResult {
            path: path.to_string(),
            state,
        }
        .render(mode),
        Applied::Stale(stale) => OperationResult {
            success: false,
            message: format!("{path} changed while waiting for the assistant; {stale}"),
        }
        .render(mode),
    }
}
