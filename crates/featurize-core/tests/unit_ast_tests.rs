//! Unit tests for AST and table types
//!
//! Tests the core data structures shared by the parser and runtime crates.

use featurize_core::ast::*;
use featurize_core::{CoreError, Table};

// =============================================================================
// Expression Tests
// =============================================================================

#[test]
fn test_expression_column_ref() {
    let expr = Expression::column("sepal_length");
    match expr {
        Expression::ColumnRef(name) => assert_eq!(name, "sepal_length"),
        _ => panic!("Expected column reference"),
    }
}

#[test]
fn test_expression_clone_is_equal() {
    let expr = Expression::binary(
        OperatorKind::Divide,
        Expression::apply(UnaryFunction::Log, Expression::column("A")),
        Expression::column("B"),
    );

    let cloned = expr.clone();
    assert_eq!(expr, cloned);
}

#[test]
fn test_expression_serde_json() -> anyhow::Result<()> {
    let expr = Expression::binary(
        OperatorKind::Add,
        Expression::column("A"),
        Expression::apply(UnaryFunction::Sqrt, Expression::column("B")),
    );

    let json = serde_json::to_string(&expr)?;
    assert!(json.contains("\"add\""));
    assert!(json.contains("\"sqrt\""));

    let deserialized: Expression = serde_json::from_str(&json)?;
    assert_eq!(expr, deserialized);
    Ok(())
}

// =============================================================================
// Feature Definition Tests
// =============================================================================

#[test]
fn test_feature_definition_new() {
    let def = FeatureDefinition::new(
        "log_entropy",
        Expression::apply(UnaryFunction::Log, Expression::column("visible_entropy")),
    );

    assert_eq!(def.target, "log_entropy");
    assert_eq!(def.expression.kind(), Some(OperatorKind::Apply));
}

// =============================================================================
// Table Tests
// =============================================================================

#[test]
fn test_table_empty() {
    let table = Table::new();
    assert!(table.is_empty());
    assert_eq!(table.num_rows(), 0);
    assert!(table.column("A").is_none());
}

#[test]
fn test_table_first_column_sets_row_count() {
    let mut table = Table::new();
    table.insert_column("A", vec![1.0, 2.0]).unwrap();
    assert_eq!(table.num_rows(), 2);

    let err = table.insert_column("B", vec![1.0, 2.0, 3.0]).unwrap_err();
    assert!(matches!(err, CoreError::LengthMismatch { expected: 2, actual: 3, .. }));
}

#[test]
fn test_table_rows_iterate_in_order() {
    let table = Table::from_columns(vec![("A", vec![1.0, 2.0]), ("B", vec![3.0, 4.0])]).unwrap();

    let rows: Vec<Vec<f64>> = table.rows().collect();
    assert_eq!(rows, vec![vec![1.0, 3.0], vec![2.0, 4.0]]);
}

#[test]
fn test_table_select_duplicate_names() {
    let table = Table::from_columns(vec![("A", vec![1.0]), ("C", vec![7.0])]).unwrap();
    let projected = table.select(&["A", "C", "C"]).unwrap();
    assert_eq!(projected.column_names(), &["A", "C"]);
}

#[test]
fn test_table_serde_round_trip() -> anyhow::Result<()> {
    let table = Table::from_columns(vec![("a", vec![1.0, 2.0]), ("b", vec![3.0, 4.0])])?;

    let json = serde_json::to_string(&table)?;
    let deserialized: Table = serde_json::from_str(&json)?;
    assert_eq!(deserialized, table);
    Ok(())
}

#[test]
fn test_table_deserialize_rejects_ragged_columns() {
    let result = serde_json::from_str::<Table>(r#"{"names":["a","b"],"columns":[[1.0,2.0],[1.0]]}"#);

    let err = result.unwrap_err().to_string();
    assert!(err.contains("Column 'b' has 1 rows"), "unexpected error: {}", err);
}

#[test]
fn test_table_deserialize_rejects_duplicate_names() {
    let result = serde_json::from_str::<Table>(r#"{"names":["a","a"],"columns":[[1.0],[2.0]]}"#);

    let err = result.unwrap_err().to_string();
    assert!(err.contains("Duplicate column: a"), "unexpected error: {}", err);
}

#[test]
fn test_table_deserialize_rejects_missing_column_data() {
    let result = serde_json::from_str::<Table>(r#"{"names":["a","b"],"columns":[[1.0]]}"#);
    assert!(result.is_err());
}
