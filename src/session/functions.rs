//! Functions applied directly to the current input.

use super::error::DomainError;
use crate::core::AngleMode;
use serde::{Deserialize, Serialize};

/// Largest argument whose factorial fits in an `f64`.
const MAX_FACTORIAL: f64 = 170.0;

/// Single-argument functions that do not depend on the angle mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnaryFunction {
    Square,
    Cube,
    Sqrt,
    Cbrt,
    Reciprocal,
    Abs,
    Exp,
    Exp10,
    Ln,
    Log10,
    Sinh,
    Cosh,
    Tanh,
    Asinh,
    Acosh,
    Atanh,
    Factorial,
}

impl UnaryFunction {
    pub const ALL: [UnaryFunction; 17] = [
        Self::Square,
        Self::Cube,
        Self::Sqrt,
        Self::Cbrt,
        Self::Reciprocal,
        Self::Abs,
        Self::Exp,
        Self::Exp10,
        Self::Ln,
        Self::Log10,
        Self::Sinh,
        Self::Cosh,
        Self::Tanh,
        Self::Asinh,
        Self::Acosh,
        Self::Atanh,
        Self::Factorial,
    ];

    /// Keypad name of the function.
    pub fn name(self) -> &'static str {
        match self {
            Self::Square => "square",
            Self::Cube => "cube",
            Self::Sqrt => "sqrt",
            Self::Cbrt => "cbrt",
            Self::Reciprocal => "reciprocal",
            Self::Abs => "abs",
            Self::Exp => "exp",
            Self::Exp10 => "exp10",
            Self::Ln => "ln",
            Self::Log10 => "log",
            Self::Sinh => "sinh",
            Self::Cosh => "cosh",
            Self::Tanh => "tanh",
            Self::Asinh => "asinh",
            Self::Acosh => "acosh",
            Self::Atanh => "atanh",
            Self::Factorial => "factorial",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }

    /// Apply the function; NaN or infinite results are domain errors.
    pub fn apply(self, x: f64) -> Result<f64, DomainError> {
        let value = match self {
            Self::Square => x * x,
            Self::Cube => x * x * x,
            Self::Sqrt => x.sqrt(),
            Self::Cbrt => x.cbrt(),
            Self::Reciprocal => 1.0 / x,
            Self::Abs => x.abs(),
            Self::Exp => x.exp(),
            Self::Exp10 => 10f64.powf(x),
            Self::Ln => x.ln(),
            Self::Log10 => x.log10(),
            Self::Sinh => x.sinh(),
            Self::Cosh => x.cosh(),
            Self::Tanh => x.tanh(),
            Self::Asinh => x.asinh(),
            Self::Acosh => x.acosh(),
            Self::Atanh => x.atanh(),
            Self::Factorial => factorial(x)?,
        };
        finite(self.name(), x, value)
    }
}

/// Forward trigonometric functions; the argument is in the active angle unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrigFunction {
    Sin,
    Cos,
    Tan,
}

impl TrigFunction {
    pub fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        [Self::Sin, Self::Cos, Self::Tan]
            .into_iter()
            .find(|f| f.name() == name)
    }

    pub fn apply(self, angle: f64, mode: AngleMode) -> Result<f64, DomainError> {
        let radians = mode.to_radians(angle);
        let value = match self {
            Self::Sin => radians.sin(),
            Self::Cos => radians.cos(),
            Self::Tan => radians.tan(),
        };
        finite(self.name(), angle, value)
    }
}

/// Inverse trigonometric functions; the result is in the active angle unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InverseTrigFunction {
    Asin,
    Acos,
    Atan,
}

impl InverseTrigFunction {
    pub fn name(self) -> &'static str {
        match self {
            Self::Asin => "asin",
            Self::Acos => "acos",
            Self::Atan => "atan",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        [Self::Asin, Self::Acos, Self::Atan]
            .into_iter()
            .find(|f| f.name() == name)
    }

    pub fn apply(self, x: f64, mode: AngleMode) -> Result<f64, DomainError> {
        let radians = match self {
            Self::Asin => x.asin(),
            Self::Acos => x.acos(),
            Self::Atan => x.atan(),
        };
        finite(self.name(), x, mode.from_radians(radians))
    }
}

/// `n!` for non-negative integers.
///
/// # Example
///
/// ```rust
/// use scicalc::session::factorial;
///
/// assert_eq!(factorial(5.0).unwrap(), 120.0);
/// assert_eq!(factorial(0.0).unwrap(), 1.0);
/// assert!(factorial(-1.0).is_err());
/// assert!(factorial(2.5).is_err());
/// ```
pub fn factorial(n: f64) -> Result<f64, DomainError> {
    if !n.is_finite() || n < 0.0 || n.fract() != 0.0 {
        return Err(DomainError::InvalidFactorial(n));
    }
    if n > MAX_FACTORIAL {
        return Err(DomainError::Undefined {
            function: "factorial",
            input: n,
        });
    }
    let mut result = 1.0;
    for i in 2..=(n as u32) {
        result *= f64::from(i);
    }
    Ok(result)
}

fn finite(function: &'static str, input: f64, value: f64) -> Result<f64, DomainError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(DomainError::Undefined { function, input })
    }
}
