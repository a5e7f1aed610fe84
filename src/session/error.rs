//! Session error taxonomy.
//!
//! Both kinds are handled the same way by the session: the current input
//! becomes the [`ERROR_SENTINEL`] and the error is returned as a value.

use crate::eval::EvalError;
use thiserror::Error;

/// Text shown in place of the current input after a failure.
pub const ERROR_SENTINEL: &str = "Error";

/// Invalid argument to a function applied to the current input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    #[error("Factorial is only defined for non-negative integers, got {0}")]
    InvalidFactorial(f64),

    #[error("'{0}' is not a number")]
    NotANumber(String),

    #[error("{function} is undefined for {input}")]
    Undefined { function: &'static str, input: f64 },

    #[error("{0} cannot be displayed")]
    NonFinite(f64),
}

/// Any failure of a session operation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    #[error("Evaluation failed: {0}")]
    Evaluation(#[from] EvalError),

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),
}
