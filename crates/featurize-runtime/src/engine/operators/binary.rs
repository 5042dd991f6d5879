//! Binary operator execution

use crate::error::{Result, RuntimeError};
use featurize_core::ast::OperatorKind;
use featurize_core::Column;

/// Arithmetic operators that combine two columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BinaryOp {
    Multiply,
    Subtract,
    Divide,
    Add,
}

impl BinaryOp {
    /// The binary form of `kind`; `None` for `apply`
    pub(crate) fn from_kind(kind: OperatorKind) -> Option<Self> {
        match kind {
            OperatorKind::Multiply => Some(BinaryOp::Multiply),
            OperatorKind::Subtract => Some(BinaryOp::Subtract),
            OperatorKind::Divide => Some(BinaryOp::Divide),
            OperatorKind::Add => Some(BinaryOp::Add),
            OperatorKind::Apply => None,
        }
    }
}

/// Execute a binary operation row by row
///
/// Division follows IEEE-754: `x / 0.0` is `inf`, `-inf` or `NaN`.
pub(crate) fn execute_binary_op(left: &[f64], op: BinaryOp, right: &[f64]) -> Result<Column> {
    if left.len() != right.len() {
        return Err(RuntimeError::LengthMismatch {
            left: left.len(),
            right: right.len(),
        });
    }

    let kernel: fn(f64, f64) -> f64 = match op {
        BinaryOp::Add => |l, r| l + r,
        BinaryOp::Subtract => |l, r| l - r,
        BinaryOp::Multiply => |l, r| l * r,
        BinaryOp::Divide => |l, r| l / r,
    };

    Ok(left.iter().zip(right).map(|(l, r)| kernel(*l, *r)).collect())
}
