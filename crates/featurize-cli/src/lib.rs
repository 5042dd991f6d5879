//! Featurize pipeline orchestrator library
//!
//! Configuration loading and stage sequencing, shared by the `featurize`
//! binary and its tests.

pub mod config;
pub mod pipeline;

pub use config::PipelineConfig;
pub use pipeline::{run_features, run_pipeline, RunDirectory};
