//! Evaluation engine module
//!
//! Provides the expression evaluator and its column kernels.

mod evaluator;
mod operators;

#[cfg(test)]
mod tests;

// Re-export for convenience
pub use evaluator::ExpressionEvaluator;
