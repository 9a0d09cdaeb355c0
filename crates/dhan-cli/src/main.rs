//! Dhanmitra CLI - Personal finance advisor
//!
//! Usage:
//!   dhan analyze --income 100000 --expenses 90000 --age 28 --risk medium
//!   dhan analyze --file profile.json --json
//!   dhan policies             Show allocation policy per risk tier
//!   dhan config show          Show effective advisory rules

mod cli;
mod commands;


use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use dhan_core::{Advisor, AdvisorConfig};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

/// Exit status for input the advisor rejected
const EXIT_VALIDATION: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact().with_writer(std::io::stderr))
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            if commands::is_validation_error(&e) {
                ExitCode::from(EXIT_VALIDATION)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config;

    match cli.command {
        Commands::Analyze {
            income,
            expenses,
            savings,
            age,
            risk,
            file,
            json,
        } => {
            let advisor = load_advisor(config_path.as_deref())?;
            let flags = profile_from_flags(income, expenses, savings, age, risk);
            commands::cmd_analyze(&advisor, flags, file.as_deref(), json)
        }
        Commands::Policies => commands::cmd_policies(),
        Commands::Config { action } => match action {
            None | Some(ConfigAction::Show) => {
                let advisor = load_advisor(config_path.as_deref())?;
                commands::cmd_config_show(advisor.config(), config_path.as_deref())
            }
            Some(ConfigAction::Path) => commands::cmd_config_path(),
        },
    }
}

fn load_advisor(path: Option<&Path>) -> Result<Advisor> {
    let config = AdvisorConfig::load(path).context("Failed to load advisory rules")?;
    Ok(Advisor::new(config))
}
