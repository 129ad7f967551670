//! CLI - Command-line argument parsing
//!
//! Defines the CLI structure using clap.
//! Keeps argument parsing separate from execution logic.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use urodiag_common::parse_yes_no;

/// urodiag CLI
#[derive(Parser)]
#[command(name = "urodiagctl")]
#[command(about = "Presumptive scoring of acute urinary system conditions", long_about = None)]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Score a single patient observation
    Score {
        /// Body temperature in degrees Celsius (35.0 to 42.0)
        #[arg(long)]
        temperature: f64,

        /// Nausea present (yes/no)
        #[arg(long, value_parser = yes_no, default_value = "no", action = clap::ArgAction::Set)]
        nausea: bool,

        /// Lumbar pain present (yes/no)
        #[arg(long, value_parser = yes_no, default_value = "no", action = clap::ArgAction::Set)]
        lumbar_pain: bool,

        /// Urine pushing present (yes/no)
        #[arg(long, value_parser = yes_no, default_value = "no", action = clap::ArgAction::Set)]
        urine_pushing: bool,

        /// Micturition pains present (yes/no)
        #[arg(long, value_parser = yes_no, default_value = "no", action = clap::ArgAction::Set)]
        micturition_pains: bool,

        /// Burning of urethra present (yes/no)
        #[arg(long, value_parser = yes_no, default_value = "no", action = clap::ArgAction::Set)]
        burning_urethra: bool,

        /// Output JSON only
        #[arg(long)]
        json: bool,
    },

    /// Summarize a labeled dataset CSV
    Summary {
        /// Dataset file (falls back to data_file from config)
        file: Option<PathBuf>,

        /// Output JSON only
        #[arg(long)]
        json: bool,
    },

    /// Check scorer agreement against a labeled dataset CSV
    Evaluate {
        /// Dataset file (falls back to data_file from config)
        file: Option<PathBuf>,

        /// Output JSON only
        #[arg(long)]
        json: bool,
    },
}

/// clap value parser for the dataset's yes/no boolean encoding.
fn yes_no(value: &str) -> Result<bool, String> {
    parse_yes_no(value).map_err(|e| e.to_string())
}
