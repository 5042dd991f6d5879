//! Feature generation module
//!
//! Builds the features table from a clean dataset and an ordered list of
//! feature definitions.

pub mod generator;

// Re-export for convenience
pub use generator::FeatureGenerator;
