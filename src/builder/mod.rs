//! Builder API for ergonomic session construction.
//!
//! This module provides a fluent builder for [`CalculatorSession`] and the
//! `state_enum!` macro used for the session's input states.
//!
//! [`CalculatorSession`]: crate::session::CalculatorSession

pub mod error;
pub mod macros;
pub mod session;

pub use error::BuildError;
pub use session::SessionBuilder;
