//! Side panels of the calculator: statistics, equation solving, unit
//! conversion, and the features that are deliberately not implemented.
//!
//! Tools never touch a [`CalculatorSession`]; they take their inputs
//! directly and render results with a [`NumberFormat`].
//!
//! [`CalculatorSession`]: crate::session::CalculatorSession
//! [`NumberFormat`]: crate::format::NumberFormat

pub mod convert;
pub mod solver;
pub mod stats;
pub mod unsupported;

pub use convert::{
    convert_angle, convert_base, describe_angle_conversion, describe_base_conversion,
    ConversionError,
};
pub use solver::{parse_coefficient, solve_linear, solve_quadratic, EquationKind, Solution};
pub use stats::{parse_data, StatOperation, StatValue, StatsError};
pub use unsupported::{CalculusOperation, ComplexFunction, MatrixOperation, Unsupported};
