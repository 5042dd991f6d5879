//! Operators and unary functions for feature expressions

use serde::{Deserialize, Serialize};
use std::fmt;

/// Operation kinds supported in `feature_eng` expressions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperatorKind {
    /// Element-wise unary function (`apply`)
    Apply,
    /// Multiplication (`multiply`)
    Multiply,
    /// Subtraction (`subtract`)
    Subtract,
    /// Division (`divide`)
    Divide,
    /// Addition (`add`)
    Add,
}

impl OperatorKind {
    /// All supported operators
    pub const ALL: [OperatorKind; 5] = [
        OperatorKind::Apply,
        OperatorKind::Multiply,
        OperatorKind::Subtract,
        OperatorKind::Divide,
        OperatorKind::Add,
    ];

    /// Look up an operator by its configuration name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "apply" => Some(OperatorKind::Apply),
            "multiply" => Some(OperatorKind::Multiply),
            "subtract" => Some(OperatorKind::Subtract),
            "divide" => Some(OperatorKind::Divide),
            "add" => Some(OperatorKind::Add),
            _ => None,
        }
    }

    /// Configuration name of this operator
    pub fn as_str(&self) -> &'static str {
        match self {
            OperatorKind::Apply => "apply",
            OperatorKind::Multiply => "multiply",
            OperatorKind::Subtract => "subtract",
            OperatorKind::Divide => "divide",
            OperatorKind::Add => "add",
        }
    }

    /// Returns true if this operator needs a second operand
    pub fn is_binary(&self) -> bool {
        !matches!(self, OperatorKind::Apply)
    }
}

impl fmt::Display for OperatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Allow-list of element-wise numeric transforms usable with `apply`
///
/// Names follow numpy's ufunc names so existing configurations keep working.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnaryFunction {
    Square,
    Sqrt,
    Cbrt,
    Exp,
    Expm1,
    Log,
    Log2,
    Log10,
    Log1p,
    Abs,
    Negative,
    Reciprocal,
    Sign,
    Floor,
    Ceil,
    Rint,
    Trunc,
    Sin,
    Cos,
    Tan,
    Tanh,
}

impl UnaryFunction {
    /// Look up a function by name, accepting numpy aliases for `abs`
    pub fn from_name(name: &str) -> Option<Self> {
        let function = match name {
            "square" => UnaryFunction::Square,
            "sqrt" => UnaryFunction::Sqrt,
            "cbrt" => UnaryFunction::Cbrt,
            "exp" => UnaryFunction::Exp,
            "expm1" => UnaryFunction::Expm1,
            "log" => UnaryFunction::Log,
            "log2" => UnaryFunction::Log2,
            "log10" => UnaryFunction::Log10,
            "log1p" => UnaryFunction::Log1p,
            "abs" | "absolute" | "fabs" => UnaryFunction::Abs,
            "negative" => UnaryFunction::Negative,
            "reciprocal" => UnaryFunction::Reciprocal,
            "sign" => UnaryFunction::Sign,
            "floor" => UnaryFunction::Floor,
            "ceil" => UnaryFunction::Ceil,
            "rint" => UnaryFunction::Rint,
            "trunc" => UnaryFunction::Trunc,
            "sin" => UnaryFunction::Sin,
            "cos" => UnaryFunction::Cos,
            "tan" => UnaryFunction::Tan,
            "tanh" => UnaryFunction::Tanh,
            _ => return None,
        };
        Some(function)
    }

    /// Canonical name of this function
    pub fn as_str(&self) -> &'static str {
        match self {
            UnaryFunction::Square => "square",
            UnaryFunction::Sqrt => "sqrt",
            UnaryFunction::Cbrt => "cbrt",
            UnaryFunction::Exp => "exp",
            UnaryFunction::Expm1 => "expm1",
            UnaryFunction::Log => "log",
            UnaryFunction::Log2 => "log2",
            UnaryFunction::Log10 => "log10",
            UnaryFunction::Log1p => "log1p",
            UnaryFunction::Abs => "abs",
            UnaryFunction::Negative => "negative",
            UnaryFunction::Reciprocal => "reciprocal",
            UnaryFunction::Sign => "sign",
            UnaryFunction::Floor => "floor",
            UnaryFunction::Ceil => "ceil",
            UnaryFunction::Rint => "rint",
            UnaryFunction::Trunc => "trunc",
            UnaryFunction::Sin => "sin",
            UnaryFunction::Cos => "cos",
            UnaryFunction::Tan => "tan",
            UnaryFunction::Tanh => "tanh",
        }
    }
}

impl fmt::Display for UnaryFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
