//! urodiagctl - CLI for the urodiag scoring tools
//!
//! Scores single patient observations and inspects the labeled acute
//! inflammations dataset. Illustrative heuristics only, not medical advice.

mod cli;
mod commands;
mod config;
mod display;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Quiet by default; RUST_LOG overrides
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = cli::Cli::parse();
    let config = config::load();

    match cli.command {
        cli::Commands::Score {
            temperature,
            nausea,
            lumbar_pain,
            urine_pushing,
            micturition_pains,
            burning_urethra,
            json,
        } => commands::score_command(
            temperature,
            nausea,
            lumbar_pain,
            urine_pushing,
            micturition_pains,
            burning_urethra,
            json,
            &config,
        ),
        cli::Commands::Summary { file, json } => commands::summary_command(file, json, &config),
        cli::Commands::Evaluate { file, json } => commands::evaluate_command(file, json, &config),
    }
}
