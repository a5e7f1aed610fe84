//! Safe arithmetic expression evaluation.
//!
//! Expressions are tokenized and evaluated by a small recursive-descent
//! parser over `f64`; nothing is ever executed as code. The supported
//! language is numbers, `+ - * / % ^`, parentheses, the constants `pi`,
//! `π` and `e`, and the functions `sin cos tan asin acos atan sinh cosh
//! tanh asinh acosh atanh sqrt cbrt abs exp ln log` (radians, `log` is
//! base ten).
//!
//! # Example
//!
//! ```rust
//! use scicalc::core::AngleMode;
//! use scicalc::eval::{evaluate, evaluate_in_mode, EvalError};
//!
//! assert_eq!(evaluate("2 + 3 * 4").unwrap(), 14.0);
//! assert_eq!(evaluate("1 / 0"), Err(EvalError::NonFinite));
//!
//! let half = evaluate_in_mode("sin(30)", AngleMode::Deg).unwrap();
//! assert!((half - 0.5).abs() < 1e-12);
//! ```

mod error;
mod lexer;
mod parser;
mod preprocess;

pub use error::EvalError;
pub use parser::MAX_DEPTH;
pub use preprocess::{normalize_operators, preprocess};

use crate::core::AngleMode;
use parser::Parser;

/// Evaluate an already preprocessed expression.
///
/// Fails with [`EvalError::NonFinite`] when the arithmetic succeeds but
/// produces NaN or an infinity (division by zero, `sqrt(-1)`, overflow).
pub fn evaluate(expr: &str) -> Result<f64, EvalError> {
    let tokens = lexer::tokenize(expr)?;
    let value = Parser::new(&tokens).evaluate()?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EvalError::NonFinite)
    }
}

/// Preprocess `expr` for the given angle mode, then evaluate it.
pub fn evaluate_in_mode(expr: &str, mode: AngleMode) -> Result<f64, EvalError> {
    evaluate(&preprocess(expr, mode))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluates_simple_arithmetic() {
        assert_eq!(evaluate("5 - 3").unwrap(), 2.0);
        assert_eq!(evaluate("2 ^ 10").unwrap(), 1024.0);
    }

    #[test]
    fn division_by_zero_is_non_finite() {
        assert_eq!(evaluate("1 / 0"), Err(EvalError::NonFinite));
        assert_eq!(evaluate("0 / 0"), Err(EvalError::NonFinite));
        assert_eq!(evaluate("5 % 0"), Err(EvalError::NonFinite));
    }

    #[test]
    fn domain_errors_are_non_finite() {
        assert_eq!(evaluate("sqrt(-1)"), Err(EvalError::NonFinite));
        assert_eq!(evaluate("ln(0)"), Err(EvalError::NonFinite));
    }

    #[test]
    fn trig_follows_angle_mode() {
        let deg = evaluate_in_mode("cos(60)", AngleMode::Deg).unwrap();
        let grad = evaluate_in_mode("sin(100)", AngleMode::Grad).unwrap();
        let rad = evaluate_in_mode("sin(0)", AngleMode::Rad).unwrap();

        assert!((deg - 0.5).abs() < 1e-12);
        assert!((grad - 1.0).abs() < 1e-12);
        assert_eq!(rad, 0.0);
    }

    #[test]
    fn display_values_evaluate_back() {
        assert_eq!(evaluate("1.0000000000e+16 / 2").unwrap(), 5e15);
        assert_eq!(evaluate("-7").unwrap(), -7.0);
    }
}
