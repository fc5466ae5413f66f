pub mod cli;
pub mod core;

use crate::cli::evaluate::EvaluateRequest;
use crate::core::config::AppConfig;
use anyhow::Result;
use tracing::{debug, info};

pub enum AppCommand {
    Budget,
    Plan,
    Evaluate(EvaluateRequest),
}

pub fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("LoanCompass starting...");

    match command {
        AppCommand::Budget => cli::budget::run(&load_config(config_path)?),
        AppCommand::Plan => cli::plan::run(&load_config(config_path)?),
        AppCommand::Evaluate(request) => {
            debug!(?request, "Evaluating single item");
            cli::evaluate::run(&request)
        }
    }
}

fn load_config(config_path: Option<&str>) -> Result<AppConfig> {
    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");
    Ok(config)
}
