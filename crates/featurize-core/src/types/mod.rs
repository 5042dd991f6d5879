//! Data types for featurize
//!
//! This module contains the tabular data model:
//! - Column values
//! - Tables of named, equally sized columns

pub mod table;

pub use table::{Column, Table};
