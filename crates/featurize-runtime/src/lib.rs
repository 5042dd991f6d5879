//! Featurize Runtime - Feature evaluation engine for featurize
//!
//! This crate evaluates parsed feature expressions against tables and
//! provides the dataset stages that surround feature generation:
//! - Expression evaluation
//! - Sequential feature generation
//! - Raw dataset creation and CSV persistence

pub mod dataset;
pub mod engine;
pub mod error;
pub mod feature;

// Re-export main types
pub use dataset::{create_dataset, load_table, save_table, DatasetConfig};
pub use engine::ExpressionEvaluator;
pub use error::{Result, RuntimeError};
pub use feature::FeatureGenerator;
