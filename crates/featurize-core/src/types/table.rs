//! Columnar numeric tables
//!
//! A `Table` is an ordered set of uniquely named columns that all share the
//! same row count and row order. Columns are kept in insertion order;
//! replacing a column keeps its position. Deserialization checks the same
//! invariants as the constructors.

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};

/// A single column of numeric values, aligned to the table's row order
pub type Column = Vec<f64>;

/// Ordered collection of named numeric columns
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTable")]
pub struct Table {
    names: Vec<String>,
    columns: Vec<Column>,
}

/// Unchecked serialized form of a `Table`
#[derive(Deserialize)]
struct RawTable {
    names: Vec<String>,
    columns: Vec<Column>,
}

impl TryFrom<RawTable> for Table {
    type Error = CoreError;

    fn try_from(raw: RawTable) -> Result<Self> {
        if raw.names.len() != raw.columns.len() {
            return Err(CoreError::ColumnCountMismatch {
                names: raw.names.len(),
                columns: raw.columns.len(),
            });
        }
        check_unique(&raw.names)?;

        let mut table = Table::new();
        for (name, values) in raw.names.into_iter().zip(raw.columns) {
            table.insert_column(name, values)?;
        }
        Ok(table)
    }
}

fn check_unique(names: &[String]) -> Result<()> {
    for (index, name) in names.iter().enumerate() {
        if names[..index].contains(name) {
            return Err(CoreError::DuplicateColumn(name.clone()));
        }
    }
    Ok(())
}

impl Table {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from `(name, values)` pairs, in order
    pub fn from_columns<I, S>(columns: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, Column)>,
        S: Into<String>,
    {
        let mut table = Self::new();
        for (name, values) in columns {
            table.insert_column(name, values)?;
        }
        Ok(table)
    }

    /// Build a table from row-major data
    ///
    /// Names must be unique and every row must have exactly one value per
    /// column name.
    pub fn from_rows(names: Vec<String>, rows: &[Vec<f64>]) -> Result<Self> {
        check_unique(&names)?;

        let mut columns: Vec<Column> = vec![Vec::with_capacity(rows.len()); names.len()];

        for (index, row) in rows.iter().enumerate() {
            if row.len() != names.len() {
                return Err(CoreError::RowWidthMismatch {
                    row: index,
                    expected: names.len(),
                    actual: row.len(),
                });
            }
            for (column, value) in columns.iter_mut().zip(row) {
                column.push(*value);
            }
        }

        Ok(Self { names, columns })
    }

    /// Number of rows (0 for a table without columns)
    pub fn num_rows(&self) -> usize {
        self.columns.first().map(Vec::len).unwrap_or(0)
    }

    /// Number of columns
    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Column names in table order
    pub fn column_names(&self) -> &[String] {
        &self.names
    }

    /// Returns true if a column with this name exists
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Get a column by name
    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.position(name).map(|idx| self.columns[idx].as_slice())
    }

    /// Insert a column, replacing any existing column of the same name in place
    ///
    /// The column length must match the row count unless the table has no
    /// columns yet.
    pub fn insert_column(&mut self, name: impl Into<String>, values: Column) -> Result<()> {
        let name = name.into();

        match self.position(&name) {
            Some(idx) => {
                // A single-column table may be replaced with any length
                if self.columns.len() > 1 && values.len() != self.num_rows() {
                    return Err(CoreError::LengthMismatch {
                        column: name,
                        expected: self.num_rows(),
                        actual: values.len(),
                    });
                }
                self.columns[idx] = values;
            }
            None => {
                if !self.columns.is_empty() && values.len() != self.num_rows() {
                    return Err(CoreError::LengthMismatch {
                        column: name,
                        expected: self.num_rows(),
                        actual: values.len(),
                    });
                }
                self.names.push(name);
                self.columns.push(values);
            }
        }

        Ok(())
    }

    /// Project the table onto the given columns, in the given order
    ///
    /// A name listed twice appears once, at its first position.
    pub fn select<S: AsRef<str>>(&self, names: &[S]) -> Result<Table> {
        let mut selected = Table::new();
        for name in names {
            let name = name.as_ref();
            let values = self
                .column(name)
                .ok_or_else(|| CoreError::ColumnNotFound(name.to_string()))?;
            selected.insert_column(name, values.to_vec())?;
        }
        Ok(selected)
    }

    /// Iterate over rows in order
    pub fn rows(&self) -> impl Iterator<Item = Vec<f64>> + '_ {
        (0..self.num_rows()).map(move |index| self.columns.iter().map(|c| c[index]).collect())
    }

    /// Append the rows of `other` below this table's rows
    ///
    /// `other` must carry every column of this table; columns are matched by name.
    pub fn append_rows(&mut self, other: &Table) -> Result<()> {
        if self.is_empty() {
            *self = other.clone();
            return Ok(());
        }

        let mut incoming = Vec::with_capacity(self.names.len());
        for name in &self.names {
            let values = other
                .column(name)
                .ok_or_else(|| CoreError::ColumnNotFound(name.clone()))?;
            incoming.push(values);
        }

        for (column, values) in self.columns.iter_mut().zip(incoming) {
            column.extend_from_slice(values);
        }

        Ok(())
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }
}
