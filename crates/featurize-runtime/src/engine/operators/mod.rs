//! Operator execution modules
//!
//! This module contains the element-wise column kernels used by the evaluator.

mod binary;
mod unary;

pub(crate) use binary::{execute_binary_op, BinaryOp};
pub(crate) use unary::execute_unary_op;
