//! Dataset stages
//!
//! Turns the raw two-cloud text file into a labeled table and persists
//! tables as CSV.

pub mod csv_io;
pub mod raw;

pub use csv_io::{load_table, save_table};
pub use raw::{create_dataset, create_dataset_from_str, DatasetConfig, CLASS_COLUMN};
