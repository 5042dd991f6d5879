//! Featurize Parser - YAML to AST parser for featurize configuration
//!
//! This crate provides parsers for converting the `generate_features`
//! section of a pipeline configuration into featurize AST structures.

pub mod error;
pub mod expression_parser;
pub mod feature_parser;
pub mod yaml_parser;

// Re-export main parser types
pub use error::{ParseError, Result};
pub use expression_parser::ExpressionParser;
pub use feature_parser::FeatureParser;
pub use yaml_parser::YamlParser;
