//! Featurize command-line tool
//!
//! Runs the dataset and feature stages of the clouds pipeline.

use anyhow::Result;
use clap::{Parser, Subcommand};
use featurize_cli::config::{PipelineConfig, DEFAULT_CONFIG_PATH};
use featurize_cli::{run_features, run_pipeline};
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "featurize")]
#[command(about = "Dataset creation and feature generation pipeline", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run every stage in a new run directory
    Run {
        /// Path to the pipeline configuration file
        #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,
    },

    /// Generate features for a saved table
    Features {
        /// Path to the pipeline configuration file
        #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,

        /// Input CSV table
        #[arg(short, long)]
        input: PathBuf,

        /// Output CSV table
        #[arg(short, long)]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    init_tracing()?;

    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Run { config } => PipelineConfig::load(&config)
            .and_then(|config| run_pipeline(&config))
            .map(|run| info!("Run artifacts saved to {}", run.root.display())),
        Commands::Features {
            config,
            input,
            output,
        } => PipelineConfig::load(&config)
            .and_then(|config| run_features(&config, &input, &output))
            .map(|()| info!("Features saved to {}", output.display())),
    };

    if let Err(e) = &outcome {
        error!("Pipeline failed: {:#}", e);
    }
    outcome
}

/// Initialize tracing subscriber
fn init_tracing() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "featurize_cli=info,featurize_runtime=info,featurize_parser=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {}", e))?;

    Ok(())
}
