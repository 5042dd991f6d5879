//! Pipeline configuration

use anyhow::Context;
use featurize_runtime::DatasetConfig;
use serde::{Deserialize, Serialize};
use serde_yaml::Value as YamlValue;
use std::path::{Path, PathBuf};

/// Default configuration file location
pub const DEFAULT_CONFIG_PATH: &str = "config/config.yaml";

/// Environment variable prefix for run settings overrides
pub const ENV_PREFIX: &str = "FEATURIZE";

/// Full pipeline configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Where the run reads from and writes to
    pub run_config: RunConfig,

    /// Raw file layout for dataset creation
    pub create_dataset: DatasetConfig,

    /// Feature generation section (`feature_col`, `target_col`, `feature_eng`)
    ///
    /// Kept as raw YAML and parsed by the feature stage, so configuration
    /// errors are reported by the stage that owns them.
    pub generate_features: YamlValue,
}

/// Run settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Raw data file copied into each run directory
    pub data_source: PathBuf,

    /// Sub-directory names inside a run directory
    #[serde(default)]
    pub data_dir: DataDirs,

    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataDirs {
    #[serde(default = "default_raw_dir")]
    pub raw: PathBuf,
    #[serde(default = "default_processed_dir")]
    pub processed: PathBuf,
}

fn default_raw_dir() -> PathBuf {
    PathBuf::from("raw")
}

fn default_processed_dir() -> PathBuf {
    PathBuf::from("processed")
}

impl Default for DataDirs {
    fn default() -> Self {
        Self {
            raw: default_raw_dir(),
            processed: default_processed_dir(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Parent directory of the timestamped run directories
    pub runs: PathBuf,
}

impl PipelineConfig {
    /// Load the configuration file, then apply `FEATURIZE__*` overrides
    ///
    /// A `.env` file in the working directory is loaded first if present.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        let mut config = Self::from_yaml_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        config.run_config = config.run_config.with_overrides(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__"),
        )?;

        tracing::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parse the configuration document
    pub fn from_yaml_str(content: &str) -> anyhow::Result<Self> {
        let config: Self = serde_yaml::from_str(content)?;
        Ok(config)
    }
}

impl RunConfig {
    /// Layer an environment source over these settings
    ///
    /// Keys are the lowercased variable names with the prefix removed, e.g.
    /// `FEATURIZE__OUTPUT__RUNS` sets `output.runs`.
    pub fn with_overrides(self, env: config::Environment) -> anyhow::Result<Self> {
        let settings = config::Config::builder()
            .set_default("data_source", path_value(&self.data_source))?
            .set_default("data_dir.raw", path_value(&self.data_dir.raw))?
            .set_default("data_dir.processed", path_value(&self.data_dir.processed))?
            .set_default("output.runs", path_value(&self.output.runs))?
            .add_source(env)
            .build()
            .context("Failed to build run settings")?;

        settings
            .try_deserialize()
            .map_err(|e| anyhow::anyhow!("Failed to deserialize run settings: {}", e))
    }
}

fn path_value(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
