//! Expression evaluation
//!
//! Resolves an `Expression` tree against a `Table`, depth-first, into a new
//! column aligned to the table's row order. Operands are never modified.

use super::operators::{execute_binary_op, execute_unary_op, BinaryOp};
use crate::error::{Result, RuntimeError};
use featurize_core::ast::{Expression, OperatorKind, UnaryFunction};
use featurize_core::{Column, Table};

/// Expression evaluator for feature columns
pub struct ExpressionEvaluator;

impl ExpressionEvaluator {
    /// Evaluate an expression against the current state of `table`
    pub fn evaluate(expr: &Expression, table: &Table) -> Result<Column> {
        match expr {
            Expression::ColumnRef(name) => Self::eval_column(name, table),

            Expression::Operation {
                kind,
                source1,
                source2,
                function,
            } => Self::eval_operation(*kind, source1, source2.as_deref(), *function, table),
        }
    }

    fn eval_column(name: &str, table: &Table) -> Result<Column> {
        table
            .column(name)
            .map(<[f64]>::to_vec)
            .ok_or_else(|| RuntimeError::MissingColumn(name.to_string()))
    }

    fn eval_operation(
        kind: OperatorKind,
        source1: &Expression,
        source2: Option<&Expression>,
        function: Option<UnaryFunction>,
        table: &Table,
    ) -> Result<Column> {
        let left = Self::evaluate(source1, table)?;

        // Unary fallback: a second operand that references a missing column
        // is dropped and the operation continues with `source1` only. The
        // dispatch below then decides whether one operand is enough.
        let right = match source2 {
            Some(node) if kind.is_binary() => match Self::evaluate(node, table) {
                Ok(column) => Some(column),
                Err(RuntimeError::MissingColumn(name)) => {
                    tracing::debug!(
                        "Second operand of '{}' unresolved (column '{}' not found), continuing with first operand only",
                        kind,
                        name
                    );
                    None
                }
                Err(e) => return Err(e),
            },
            _ => None,
        };

        match BinaryOp::from_kind(kind) {
            Some(op) => {
                let right = right.ok_or_else(|| RuntimeError::MissingOperand {
                    operator: kind.to_string(),
                })?;
                execute_binary_op(&left, op, &right)
            }
            None => {
                let function = function.ok_or_else(|| {
                    RuntimeError::UnknownFunction("apply requires a function".to_string())
                })?;
                Ok(execute_unary_op(&left, function))
            }
        }
    }
}
