//! Abstract Syntax Tree (AST) definitions for featurize
//!
//! This module contains the AST node definitions for:
//! - Expressions (column references and operations)
//! - Operators and the unary function allow-list
//! - Feature definitions and the feature-generation config

pub mod expression;
pub mod feature;
pub mod operator;

pub use expression::Expression;
pub use feature::{FeatureConfig, FeatureDefinition};
pub use operator::{OperatorKind, UnaryFunction};
