//! Expression AST nodes

use super::operator::{OperatorKind, UnaryFunction};
use serde::{Deserialize, Serialize};

/// Expression AST node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expression {
    /// Reference to an existing column by name
    ColumnRef(String),

    /// Operation over one or two sub-expressions
    Operation {
        kind: OperatorKind,
        source1: Box<Expression>,
        /// Second operand; ignored by `apply`
        source2: Option<Box<Expression>>,
        /// Transform for `apply`
        function: Option<UnaryFunction>,
    },
}

impl Expression {
    /// Create a column reference expression
    pub fn column(name: impl Into<String>) -> Self {
        Expression::ColumnRef(name.into())
    }

    /// Create a binary operation expression
    pub fn binary(kind: OperatorKind, source1: Expression, source2: Expression) -> Self {
        Expression::Operation {
            kind,
            source1: Box::new(source1),
            source2: Some(Box::new(source2)),
            function: None,
        }
    }

    /// Create an `apply` expression
    pub fn apply(function: UnaryFunction, source1: Expression) -> Self {
        Expression::Operation {
            kind: OperatorKind::Apply,
            source1: Box::new(source1),
            source2: None,
            function: Some(function),
        }
    }

    /// Operator of this node, if it is an operation
    pub fn kind(&self) -> Option<OperatorKind> {
        match self {
            Expression::ColumnRef(_) => None,
            Expression::Operation { kind, .. } => Some(*kind),
        }
    }

}
