//! Config command - show or create the config file

use regex_rocket::config::Config;
use regex_rocket::output::{OperationResult, OutputMode};

use crate::cli::ConfigAction;

/// Handle config subcommands
pub fn config_cmd(action: ConfigAction, mode: OutputMode) -> anyhow::Result<()> {
    let path = Config::config_path();

    match action {
        ConfigAction::Show => {
            let config = Config::load_from(&path);
            if mode == OutputMode::Json {
                println!("{}", serde_json::to_string_pretty(&config)?);
            } else {
                println!("# {}", path.display());
                print!("{}", toml::to_string_pretty(&config)?);
            }
        },
        ConfigAction::Init { force } => {
            if path.exists() && !force {
                OperationResult {
                    success: false,
                    message: format!(
                        "Config already exists at {}. Use --force to overwrite.",
                        path.display()
                    ),
                }
                .render(mode);
                return Ok(());
            }
            Config::default().save_to(&path)?;
            OperationResult {
                success: true,
                message: format!("Wrote default config to {}", path.display()),
            }
            .render(mode);
        },
    }
    Ok(())
}
