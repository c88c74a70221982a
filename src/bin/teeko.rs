//! Teeko CLI - Minimax game-playing agent for Teeko
//!
//! This CLI provides:
//! - An interactive game loop against the agent
//! - One-shot analysis of arbitrary board positions

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "teeko")]
#[command(version, about = "Minimax game-playing agent for Teeko", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game against the agent
    Play(teeko::cli::commands::play::PlayArgs),

    /// Analyze a board position
    Analyze(teeko::cli::commands::analyze::AnalyzeArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => teeko::cli::commands::play::execute(args),
        Commands::Analyze(args) => teeko::cli::commands::analyze::execute(args),
    }
}
