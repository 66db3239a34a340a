//! fm_cli
//!
//! JSON request file → fm_core → JSON response on stdout.
//! Logs go to stderr (`RUST_LOG`, default `info`).

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fm_core::api;
use fm_core::EngineConfig;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "fm_cli")]
#[command(about = "Run match simulations, development and training requests", long_about = None)]
struct Cli {
    /// Engine config file (JSON or YAML). Falls back to FM_ENGINE_CONFIG_PATH, then defaults.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Pretty-print the response
    #[arg(long, global = true, default_value = "false")]
    pretty: bool,

    /// Write the response to a file instead of stdout
    #[arg(long, global = true)]
    out: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate a match between two rosters
    Simulate {
        /// MatchRequest JSON file
        #[arg(long)]
        request: PathBuf,
    },

    /// Roll post-match development for one player
    Develop {
        /// DevelopRequest JSON file
        #[arg(long)]
        request: PathBuf,
    },

    /// Post-match bookkeeping for both rosters
    Aftermath {
        /// AftermathRequest JSON file
        #[arg(long)]
        request: PathBuf,
    },

    /// Apply a training session to a group of players
    Train {
        /// TrainingRequest JSON file
        #[arg(long)]
        request: PathBuf,
    },

    /// Validate and build a transfer offer
    Offer {
        /// TransferOfferRequest JSON file
        #[arg(long)]
        request: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;
    let response = run(&cli.command, &config)?;
    let output = if cli.pretty { prettify(&response)? } else { response };

    match &cli.out {
        Some(path) => {
            std::fs::write(path, output)
                .with_context(|| format!("failed to write response to {}", path.display()))?;
            tracing::info!(path = %path.display(), "response written");
        }
        None => println!("{output}"),
    }
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<EngineConfig> {
    match path {
        Some(path) => EngineConfig::from_path(path)
            .with_context(|| format!("failed to load config {}", path.display())),
        None => Ok(EngineConfig::from_env_path()
            .context("failed to load config from FM_ENGINE_CONFIG_PATH")?
            .unwrap_or_default()),
    }
}

fn run(command: &Commands, config: &EngineConfig) -> Result<String> {
    let (path, handler): (&Path, fn(&str, &EngineConfig) -> fm_core::Result<String>) = match command {
        Commands::Simulate { request } => (request, api::simulate_match_json_with_config),
        Commands::Develop { request } => (request, api::develop_player_json_with_config),
        Commands::Aftermath { request } => (request, api::process_match_aftermath_json_with_config),
        Commands::Train { request } => (request, api::apply_training_json_with_config),
        Commands::Offer { request } => (request, api::create_transfer_offer_json_with_config),
    };

    let request = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read request {}", path.display()))?;
    handler(&request, config).with_context(|| format!("request {} failed", path.display()))
}

fn prettify(json: &str) -> Result<String> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    Ok(serde_json::to_string_pretty(&value)?)
}
