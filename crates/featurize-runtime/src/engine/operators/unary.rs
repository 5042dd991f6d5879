//! Unary function execution

use featurize_core::ast::UnaryFunction;
use featurize_core::Column;

/// Apply a unary function to every value
///
/// Out-of-domain inputs yield `NaN` or infinities, never an error.
pub(crate) fn execute_unary_op(values: &[f64], function: UnaryFunction) -> Column {
    values.iter().map(|v| apply(function, *v)).collect()
}

fn apply(function: UnaryFunction, x: f64) -> f64 {
    match function {
        UnaryFunction::Square => x * x,
        UnaryFunction::Sqrt => x.sqrt(),
        UnaryFunction::Cbrt => x.cbrt(),
        UnaryFunction::Exp => x.exp(),
        UnaryFunction::Expm1 => x.exp_m1(),
        UnaryFunction::Log => x.ln(),
        UnaryFunction::Log2 => x.log2(),
        UnaryFunction::Log10 => x.log10(),
        UnaryFunction::Log1p => x.ln_1p(),
        UnaryFunction::Abs => x.abs(),
        UnaryFunction::Negative => -x,
        UnaryFunction::Reciprocal => 1.0 / x,
        // f64::signum maps 0.0 to 1.0; numpy's sign maps it to 0.0
        UnaryFunction::Sign => {
            if x > 0.0 {
                1.0
            } else if x < 0.0 {
                -1.0
            } else if x == 0.0 {
                0.0
            } else {
                f64::NAN
            }
        }
        UnaryFunction::Floor => x.floor(),
        UnaryFunction::Ceil => x.ceil(),
        UnaryFunction::Rint => x.round_ties_even(),
        UnaryFunction::Trunc => x.trunc(),
        UnaryFunction::Sin => x.sin(),
        UnaryFunction::Cos => x.cos(),
        UnaryFunction::Tan => x.tan(),
        UnaryFunction::Tanh => x.tanh(),
    }
}
