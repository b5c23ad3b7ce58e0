mod config;
mod errors;
mod llm_client;
mod pacing;
mod sentiment;
mod showcase;
#[cfg(test)]
mod test_support;

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::pacing::FixedDelay;
use crate::sentiment::experiment::{run_experiment, ExperimentOptions};
use crate::showcase::{run_showcase, ShowcaseItem, ShowcaseSettings, SHOWCASES};

/// Prompting experiments against a hosted chat-completion model.
#[derive(Parser)]
#[command(name = "shotbench", version)]
struct Cli {
    /// Model name (overrides SHOTBENCH_MODEL)
    #[arg(long, global = true)]
    model: Option<String>,

    /// Sampling temperature (overrides SHOTBENCH_TEMPERATURE)
    #[arg(long, global = true)]
    temperature: Option<f64>,

    /// Pause after each call in milliseconds (overrides SHOTBENCH_CALL_DELAY_MS)
    #[arg(long, global = true)]
    delay_ms: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compare zero-shot and five-shot sentiment labeling on the fixed test set
    Compare {
        /// Where to write the SVG chart (overrides SHOTBENCH_CHART_PATH)
        #[arg(long)]
        chart: Option<PathBuf>,

        /// Skip chart rendering
        #[arg(long, conflicts_with = "chart")]
        no_chart: bool,

        /// Also write both reports as JSON to this path
        #[arg(long, value_name = "PATH")]
        json: Option<PathBuf>,
    },

    /// Run a fixed system prompt against its sample requests
    Showcase {
        /// Showcase name (see --list)
        #[arg(required_unless_present = "list")]
        name: Option<String>,

        /// List available showcases
        #[arg(long)]
        list: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Command::Showcase { list: true, .. } = cli.command {
        for showcase in &SHOWCASES {
            println!("{:<10} {}", showcase.name, showcase.description);
        }
        return Ok(());
    }

    // Configuration first: a missing credential fails before any call is made.
    let mut config = Config::from_env()?;
    apply_overrides(&mut config, &cli)?;

    // Logs go to stderr; stdout carries the report.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting shotbench v{}", env!("CARGO_PKG_VERSION"));

    let llm = LlmClient::new(&config)?;
    info!("LLM client initialized (model: {})", llm.model());
    let pacer = FixedDelay(config.call_delay);

    match cli.command {
        Command::Compare { no_chart, json, .. } => {
            let options = ExperimentOptions::from_config(&config, no_chart, json);
            run_experiment(&config, &llm, &pacer, &options).await?;
        }
        Command::Showcase { name, .. } => {
            let name = name.unwrap_or_default();
            let Some(showcase) = showcase::find(&name) else {
                bail!("Unknown showcase '{name}' (try --list)");
            };
            let items =
                run_showcase(showcase, &llm, &pacer, ShowcaseSettings::from(&config)).await;
            let failed = failed_requests(&items);
            if !failed.is_empty() {
                warn!("{} of {} showcase requests failed", failed.len(), items.len());
                for line in failed {
                    warn!("  {line}");
                }
            }
        }
    }

    Ok(())
}

/// One `<variant> #<index>: <request>` line per failed showcase item.
fn failed_requests(items: &[ShowcaseItem]) -> Vec<String> {
    items
        .iter()
        .filter(|item| item.outcome.is_err())
        .map(|item| format!("{} #{}: {}", item.variant, item.index, item.request))
        .collect()
}

fn apply_overrides(config: &mut Config, cli: &Cli) -> Result<(), errors::AppError> {
    if let Some(model) = &cli.model {
        config.model = model.clone();
    }
    if let Some(temperature) = cli.temperature {
        config.temperature = temperature;
    }
    if let Some(delay_ms) = cli.delay_ms {
        config.call_delay = std::time::Duration::from_millis(delay_ms);
    }
    if let Command::Compare {
        chart: Some(path), ..
    } = &cli.command
    {
        config.chart_path = path.clone();
    }
    config.validate()
}
