//! Table persistence as CSV
//!
//! The first record holds the column names; every following record is one
//! row. Values are written with Rust's shortest round-trip formatting, so
//! `inf` and `NaN` survive a save/load cycle.

use crate::error::{Result, RuntimeError};
use csv::{Reader, Writer};
use featurize_core::Table;
use std::path::Path;

/// Save a table to a CSV file
pub fn save_table(table: &Table, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let mut writer = Writer::from_path(path).map_err(|e| {
        tracing::error!("Failed to save table to {}: {}", path.display(), e);
        e
    })?;

    writer.write_record(table.column_names())?;
    for row in table.rows() {
        writer.write_record(row.iter().map(|v| v.to_string()))?;
    }
    writer.flush()?;

    tracing::info!("Saved table to {}", path.display());
    Ok(())
}

/// Load a table from a CSV file written by `save_table`
pub fn load_table(path: impl AsRef<Path>) -> Result<Table> {
    let path = path.as_ref();
    let mut reader = Reader::from_path(path)?;

    let names: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();

    let mut rows = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record?;
        let row = record
            .iter()
            .zip(&names)
            .map(|(cell, name)| {
                cell.trim().parse::<f64>().map_err(|_| {
                    RuntimeError::InvalidData(format!(
                        "row {}, column '{}': cannot parse '{}' as a number",
                        index, name, cell
                    ))
                })
            })
            .collect::<Result<Vec<f64>>>()?;
        rows.push(row);
    }

    tracing::info!("Loaded {} rows from {}", rows.len(), path.display());
    Ok(Table::from_rows(names, &rows)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use featurize_core::CoreError;
    use tempfile::tempdir;

    #[test]
    fn test_save_and_load_table() {
        let table = Table::from_columns(vec![
            ("A", vec![1.0, 2.5, -3.0]),
            ("B", vec![f64::INFINITY, 0.0, 1e-9]),
        ])
        .unwrap();

        let dir = tempdir().unwrap();
        let path = dir.path().join("features.csv");

        save_table(&table, &path).unwrap();
        let loaded = load_table(&path).unwrap();

        assert_eq!(loaded, table);
    }

    #[test]
    fn test_save_writes_header() {
        let table = Table::from_columns(vec![("x", vec![1.0]), ("class", vec![0.0])]).unwrap();

        let dir = tempdir().unwrap();
        let path = dir.path().join("clouds.csv");
        save_table(&table, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "x,class\n1,0\n");
    }

    #[test]
    fn test_load_rejects_non_numeric_cell() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.csv");
        std::fs::write(&path, "A,B\n1,2\n3,oops\n").unwrap();

        let result = load_table(&path);
        assert!(matches!(
            result,
            Err(RuntimeError::InvalidData(msg)) if msg.contains("row 1") && msg.contains("'B'")
        ));
    }

    #[test]
    fn test_load_rejects_duplicate_header() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dup.csv");
        std::fs::write(&path, "A,A,C\n1,2,3\n").unwrap();

        let result = load_table(&path);
        assert!(matches!(
            result,
            Err(RuntimeError::Core(CoreError::DuplicateColumn(name))) if name == "A"
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let result = load_table(dir.path().join("missing.csv"));
        assert!(matches!(result, Err(RuntimeError::Csv(_))));
    }
}
