//! Expression evaluation errors.

use thiserror::Error;

/// Errors raised while tokenizing, parsing or computing an expression.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    #[error("Unexpected character '{ch}' at position {position}")]
    InvalidCharacter { ch: char, position: usize },

    #[error("Malformed number '{0}'")]
    InvalidNumber(String),

    #[error("Unexpected '{found}' at position {position}")]
    UnexpectedToken { found: String, position: usize },

    #[error("Expression ended unexpectedly")]
    UnexpectedEnd,

    #[error("Unbalanced parentheses")]
    UnbalancedParentheses,

    #[error("Unknown identifier '{0}'")]
    UnknownIdentifier(String),

    #[error("Expression nests deeper than {limit} levels")]
    TooDeep { limit: usize },

    #[error("Result is not a finite number")]
    NonFinite,
}
