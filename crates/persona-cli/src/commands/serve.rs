//! Web server command.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::warn;

use persona_core::config::AppConfig;
use persona_core::form::Registry;
use persona_llm::{LlmConfig, OpenAiClient};
use persona_web::state::AppState;

#[derive(Args)]
pub struct ServeArgs {
    /// Port to listen on (overrides config)
    #[arg(long)]
    pub port: Option<u16>,

    /// Host to bind to (overrides config)
    #[arg(long)]
    pub host: Option<String>,

    /// Also write logs to a file
    #[arg(long)]
    pub log: bool,

    /// Log file path (default: ./persona-serve.log)
    #[arg(long, requires = "log")]
    pub log_file: Option<PathBuf>,
}

pub async fn execute(args: ServeArgs, config: AppConfig) -> Result<()> {
    let host = args.host.unwrap_or(config.server.host);
    let port = args.port.unwrap_or(config.server.port);

    let client = OpenAiClient::new(LlmConfig::from(&config.llm))
        .context("Failed to build completion client")?;
    if !client.has_api_key() {
        warn!("No API key configured; submissions will fail until one is set");
    }

    let registry = Registry::builtin().context("Failed to load form variants")?;
    let slugs: Vec<String> = registry.variants().iter().map(|v| v.slug.clone()).collect();
    let state = AppState::new(registry, Arc::new(client));

    println!();
    println!("  {} {}", "Persona".cyan().bold(), "Web Server".bold());
    println!();
    for slug in &slugs {
        println!("  {:<11} http://{}:{}/{}", slug.green(), host, port, slug);
    }
    println!("  {:<11} http://{}:{}/feed", "feed".green(), host, port);
    println!("  {:<11} http://{}:{}/api", "API".green(), host, port);
    println!("  {:<11} {}", "Model".green(), config.llm.model);
    println!();
    println!("  {}", "Ctrl+C to stop".dimmed());
    println!();

    persona_web::run_server(state, &host, port).await?;

    Ok(())
}
