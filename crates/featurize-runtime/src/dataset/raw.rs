//! Raw dataset creation
//!
//! The raw file holds two blocks of whitespace-separated numeric rows, one
//! per cloud. Each block is located by a half-open line range. Rows of the
//! first block are labeled `0.0`, rows of the second `1.0`. Rows shorter
//! than the column list are padded with `NaN`; longer rows are rejected.

use crate::error::{Result, RuntimeError};
use featurize_core::Table;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Name of the label column added by `create_dataset`
pub const CLASS_COLUMN: &str = "class";

/// `create_dataset` configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetConfig {
    pub data: DataSection,
    pub data_prep: DataPrep,
}

/// Column layout of the raw rows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSection {
    pub columns: Vec<String>,
}

/// Line ranges of the two clouds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPrep {
    pub first_cloud: LineRange,
    pub second_cloud: LineRange,
}

/// Half-open range of line indices, `left..right`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineRange {
    pub left: usize,
    pub right: usize,
}

/// Create the labeled dataset from a raw file
pub fn create_dataset(path: impl AsRef<Path>, config: &DatasetConfig) -> Result<Table> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| {
        tracing::error!("Failed to read raw data from {}: {}", path.display(), e);
        e
    })?;
    create_dataset_from_str(&content, config)
}

/// Create the labeled dataset from raw text
pub fn create_dataset_from_str(content: &str, config: &DatasetConfig) -> Result<Table> {
    let lines: Vec<Vec<&str>> = content
        .lines()
        .map(|line| line.split_whitespace().collect())
        .collect();

    let columns = &config.data.columns;
    let mut dataset = build_cloud(&lines, config.data_prep.first_cloud, columns, 0.0, "first")?;
    let second = build_cloud(&lines, config.data_prep.second_cloud, columns, 1.0, "second")?;
    dataset.append_rows(&second)?;

    tracing::info!("Clean dataset created");
    Ok(dataset)
}

fn build_cloud(
    lines: &[Vec<&str>],
    range: LineRange,
    columns: &[String],
    label: f64,
    which: &str,
) -> Result<Table> {
    if range.left >= range.right || range.right > lines.len() {
        return Err(RuntimeError::InvalidData(format!(
            "{} cloud range {}..{} is outside the {} lines of the raw file",
            which,
            range.left,
            range.right,
            lines.len()
        )));
    }

    for boundary in [range.left, range.right - 1] {
        if lines[boundary].len() != columns.len() {
            tracing::warn!(
                "Line {} of the {} cloud has {} values, expected {}",
                boundary,
                which,
                lines[boundary].len(),
                columns.len()
            );
        }
    }

    let mut rows = Vec::with_capacity(range.right - range.left);
    for (index, tokens) in lines[range.left..range.right].iter().enumerate() {
        let line = range.left + index;
        if tokens.len() > columns.len() {
            return Err(RuntimeError::InvalidData(format!(
                "line {} has {} values, expected at most {}",
                line,
                tokens.len(),
                columns.len()
            )));
        }

        let mut row = tokens
            .iter()
            .map(|token| parse_value(token, line))
            .collect::<Result<Vec<f64>>>()?;
        row.resize(columns.len(), f64::NAN);
        row.push(label);
        rows.push(row);
    }

    let mut names = columns.to_vec();
    names.push(CLASS_COLUMN.to_string());
    Ok(Table::from_rows(names, &rows)?)
}

fn parse_value(token: &str, line: usize) -> Result<f64> {
    token.replace("/n", "").parse::<f64>().map_err(|e| {
        tracing::error!("Line {}: cannot parse '{}': {}", line, token, e);
        RuntimeError::InvalidData(format!("line {}: cannot parse '{}' as a number", line, token))
    })
}
