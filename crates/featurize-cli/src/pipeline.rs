//! Pipeline stages
//!
//! `run_pipeline` executes, in order: run directory creation, raw data copy,
//! dataset creation, clean dataset save, feature generation and features
//! save. The first failing stage stops the run.

use crate::config::{PipelineConfig, RunConfig};
use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use featurize_runtime::{create_dataset, load_table, save_table, FeatureGenerator};
use std::path::{Path, PathBuf};
use tracing::info;

pub const RAW_DATA_FILE: &str = "clouds.data";
pub const CLEAN_DATA_FILE: &str = "clouds.csv";
pub const FEATURES_FILE: &str = "features.csv";

/// Directories of a single pipeline run
#[derive(Debug, Clone, PartialEq)]
pub struct RunDirectory {
    pub root: PathBuf,
    pub raw: PathBuf,
    pub processed: PathBuf,
}

impl RunDirectory {
    /// Create `run_YYYYMMDD_HHMMSS` and its sub-directories under `output.runs`
    pub fn create(run_config: &RunConfig, now: DateTime<Local>) -> Result<Self> {
        let root = run_config
            .output
            .runs
            .join(format!("run_{}", now.format("%Y%m%d_%H%M%S")));
        let run = Self {
            raw: root.join(&run_config.data_dir.raw),
            processed: root.join(&run_config.data_dir.processed),
            root,
        };

        for dir in [&run.raw, &run.processed] {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create directory {}", dir.display()))?;
        }

        info!("Created run directory {}", run.root.display());
        Ok(run)
    }

    pub fn raw_data(&self) -> PathBuf {
        self.raw.join(RAW_DATA_FILE)
    }

    pub fn clean_data(&self) -> PathBuf {
        self.processed.join(CLEAN_DATA_FILE)
    }

    pub fn features(&self) -> PathBuf {
        self.processed.join(FEATURES_FILE)
    }
}

/// Run every stage in a fresh run directory
pub fn run_pipeline(config: &PipelineConfig) -> Result<RunDirectory> {
    let run = RunDirectory::create(&config.run_config, Local::now())?;

    acquire_data(&config.run_config.data_source, &run.raw_data())?;

    let dataset = create_dataset(run.raw_data(), &config.create_dataset)
        .context("Dataset creation failed")?;
    save_table(&dataset, run.clean_data()).context("Failed to save clean dataset")?;

    let features = FeatureGenerator::generate_from_yaml(&dataset, &config.generate_features)
        .context("Feature generation failed")?;
    save_table(&features, run.features()).context("Failed to save features")?;

    info!("Pipeline finished, artifacts in {}", run.root.display());
    Ok(run)
}

/// Run only the feature stage on a saved table
pub fn run_features(config: &PipelineConfig, input: &Path, output: &Path) -> Result<()> {
    let table = load_table(input)
        .with_context(|| format!("Failed to load table from {}", input.display()))?;

    let features = FeatureGenerator::generate_from_yaml(&table, &config.generate_features)
        .context("Feature generation failed")?;

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    save_table(&features, output)
        .with_context(|| format!("Failed to save features to {}", output.display()))?;

    Ok(())
}

/// Copy the raw data file into the run directory
fn acquire_data(source: &Path, destination: &Path) -> Result<()> {
    std::fs::copy(source, destination).with_context(|| {
        format!(
            "Failed to copy raw data from {} to {}",
            source.display(),
            destination.display()
        )
    })?;
    info!("Raw data written to {}", destination.display());
    Ok(())
}
