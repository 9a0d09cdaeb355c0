//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use dhan_core::{RawProfile, Scalar};

/// Dhanmitra - Your friendly advisor for smarter money decisions
#[derive(Parser)]
#[command(name = "dhan")]
#[command(about = "Personal finance snapshot: budget health, savings target, investment plan", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Advisory rules file (defaults to the data dir override, then built-in rules)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a financial profile
    ///
    /// Fields can be given as flags or as a JSON object in a file
    /// ({"income": 100000, "expenses": 90000, "savings": 5000, "age": 28,
    /// "risk_appetite": "medium"}). Flags override fields from the file.
    Analyze {
        /// Monthly income
        #[arg(long, allow_negative_numbers = true)]
        income: Option<f64>,

        /// Monthly expenses
        #[arg(long, allow_negative_numbers = true)]
        expenses: Option<f64>,

        /// Current savings
        #[arg(long, allow_negative_numbers = true)]
        savings: Option<f64>,

        /// Age in years (defaults to 25)
        #[arg(long, allow_negative_numbers = true)]
        age: Option<f64>,

        /// Risk appetite: low, medium, high (defaults to medium)
        #[arg(short, long)]
        risk: Option<String>,

        /// JSON profile file, or "-" to read from stdin
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the investment allocation policy for each risk tier
    Policies,

    /// Inspect advisory rule configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show the effective rules and where they were loaded from
    Show,
    /// Show the path where a rules override should be placed
    Path,
}

/// Collect profile flags into raw input, leaving unset flags empty
pub fn profile_from_flags(
    income: Option<f64>,
    expenses: Option<f64>,
    savings: Option<f64>,
    age: Option<f64>,
    risk: Option<String>,
) -> RawProfile {
    RawProfile {
        income: income.map(Scalar::from),
        expenses: expenses.map(Scalar::from),
        savings: savings.map(Scalar::from),
        age: age.map(Scalar::from),
        risk_appetite: risk,
    }
}
