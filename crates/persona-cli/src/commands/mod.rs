//! CLI command definitions and handlers.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use persona_core::config::AppConfig;

pub mod feed;
pub mod generate;
pub mod serve;
pub mod variants;

/// Persona - personality framework write-ups from a chat-completion model
#[derive(Parser)]
#[command(name = "persona")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a TOML config file (defaults to ./persona.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve(serve::ServeArgs),

    /// Run one generation from the terminal
    Generate(generate::GenerateArgs),

    /// List the available forms
    Variants,

    /// Print the sample feed item
    Feed,
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Variants => variants::execute(),
            Commands::Feed => feed::execute(),
            Commands::Serve(args) => serve::execute(args, load_config(self.config)?).await,
            Commands::Generate(args) => generate::execute(args, load_config(self.config)?).await,
        }
    }
}

/// Read config from file and environment, once, at startup.
fn load_config(explicit: Option<PathBuf>) -> Result<AppConfig> {
    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    let mut config = AppConfig::load(explicit.as_deref(), &cwd).context("Failed to load configuration")?;
    config.apply_env(|key| std::env::var(key).ok());
    Ok(config)
}
