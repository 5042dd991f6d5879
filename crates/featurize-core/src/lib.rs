//! Featurize Core - Core types and definitions for the featurize pipeline
//!
//! This crate provides the fundamental types used across the featurize crates:
//! - Table types for columnar numeric data
//! - AST (Abstract Syntax Tree) definitions for feature expressions
//! - Error types

pub mod ast;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use error::CoreError;
pub use types::{Column, Table};
