//! One-shot generation from the terminal.

use anyhow::{Context, Result};
use clap::Args;
use dialoguer::{Input, Select};
use indicatif::ProgressBar;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use persona_core::config::AppConfig;
use persona_core::form::{topic_len, Registry, CHARACTERS};
use persona_core::framework::NO_SELECTION;
use persona_core::{FormVariant, Outcome};
use persona_llm::{Generator, LlmConfig, OpenAiClient};

use crate::output;

#[derive(Args)]
pub struct GenerateArgs {
    /// Form to use (see `persona variants`)
    #[arg(long, default_value = CHARACTERS)]
    pub variant: String,

    /// Personality framework (prompted for when omitted on a terminal)
    #[arg(short, long)]
    pub framework: Option<String>,

    /// Topic text (prompted for when omitted on a terminal)
    #[arg(short, long)]
    pub topic: Option<String>,

    /// Save the output under the form's download file name
    #[arg(long)]
    pub save: bool,

    /// Save the output to this path instead
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub async fn execute(args: GenerateArgs, config: AppConfig) -> Result<()> {
    let registry = Registry::builtin().context("Failed to load form variants")?;
    let variant = registry.require(&args.variant)?;

    let interactive = std::io::stdin().is_terminal();
    let framework = match args.framework {
        Some(f) => Some(f),
        None if interactive => prompt_framework(variant)?,
        None => None,
    };
    let topic = match args.topic {
        Some(t) => t,
        None if interactive => prompt_topic(variant)?,
        None => String::new(),
    };

    let client = OpenAiClient::new(LlmConfig::from(&config.llm))
        .context("Failed to build completion client")?;
    let generator = Generator::new(Arc::new(client));

    let spinner = ProgressBar::new_spinner();
    spinner.set_message("Generating, standby...");
    spinner.enable_steady_tick(Duration::from_millis(100));
    let outcome = generator.submit(variant, framework.as_deref(), &topic).await;
    spinner.finish_and_clear();

    match outcome {
        Outcome::Success { ref text } => {
            println!("{}", text);

            let target = args
                .output
                .or_else(|| args.save.then(|| PathBuf::from(&variant.download_filename)));
            if let Some(path) = target {
                if let Some(file) = outcome.download(variant) {
                    std::fs::write(&path, &file.bytes)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    output::print_saved(&path, file.bytes.len());
                }
            }
            Ok(())
        }
        Outcome::Invalid(e) => Err(e.into()),
        Outcome::Failed(msg) => anyhow::bail!("Generation failed: {}", msg),
    }
}

/// Selector with the sentinel first, like the web form.
fn prompt_framework(variant: &FormVariant) -> Result<Option<String>> {
    let mut items = vec![NO_SELECTION];
    items.extend(variant.frameworks.iter().map(|f| f.display_name()));

    let index = Select::new()
        .with_prompt(&variant.framework_label)
        .items(&items)
        .default(0)
        .interact()?;

    Ok(Some(items[index].to_string()))
}

fn prompt_topic(variant: &FormVariant) -> Result<String> {
    let max = variant.max_chars;
    let topic: String = Input::new()
        .with_prompt(format!("{} (max {} chars)", variant.topic_label, max))
        .allow_empty(true)
        .validate_with(|input: &String| -> Result<(), String> {
            if topic_len(input) > max {
                Err(format!("At most {} characters", max))
            } else {
                Ok(())
            }
        })
        .interact_text()?;
    Ok(topic)
}
