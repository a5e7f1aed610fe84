//! Matrix, calculus and complex-number features.
//!
//! These are listed on the keypad but not implemented; every operation
//! reports [`Unsupported`].

use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Unsupported {
    #[error("Matrix {0} not implemented")]
    Matrix(MatrixOperation),

    #[error("Calculus {0} not implemented")]
    Calculus(CalculusOperation),

    #[error("Complex functions not implemented")]
    Complex(ComplexFunction),
}

macro_rules! named_operations {
    ($name:ident { $($variant:ident => $label:literal),* $(,)? } => $kind:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),*
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$(Self::$variant),*];

            pub fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $label),*
                }
            }

            pub fn from_name(name: &str) -> Option<Self> {
                Self::ALL.iter().copied().find(|op| op.name() == name)
            }

            /// Always fails with [`Unsupported`].
            pub fn perform(self) -> Result<String, Unsupported> {
                Err(Unsupported::$kind(self))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

named_operations!(MatrixOperation {
    Add => "add",
    Subtract => "subtract",
    Multiply => "multiply",
    Scalar => "scalar",
    Transpose => "transpose",
    Determinant => "determinant",
    Inverse => "inverse",
    Rref => "rref",
} => Matrix);

named_operations!(CalculusOperation {
    Derivative => "derivative",
    Integral => "integral",
    DefiniteIntegral => "definite-integral",
    Limit => "limit",
} => Calculus);

named_operations!(ComplexFunction {
    Conj => "conj",
    Re => "re",
    Im => "im",
    Arg => "arg",
} => Complex);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_operation_reports_not_implemented() {
        for op in MatrixOperation::ALL {
            let err = op.perform().unwrap_err();
            assert!(err.to_string().ends_with("not implemented"));
        }
        for op in CalculusOperation::ALL {
            assert_eq!(op.perform(), Err(Unsupported::Calculus(*op)));
        }
        for function in ComplexFunction::ALL {
            assert_eq!(
                function.perform().unwrap_err().to_string(),
                "Complex functions not implemented"
            );
        }
    }

    #[test]
    fn messages_name_the_operation() {
        assert_eq!(
            MatrixOperation::Determinant.perform().unwrap_err().to_string(),
            "Matrix determinant not implemented"
        );
        assert_eq!(
            CalculusOperation::DefiniteIntegral.to_string(),
            "definite-integral"
        );
    }

    #[test]
    fn names_parse() {
        assert_eq!(MatrixOperation::from_name("rref"), Some(MatrixOperation::Rref));
        assert_eq!(ComplexFunction::from_name("im"), Some(ComplexFunction::Im));
        assert_eq!(CalculusOperation::from_name("sum"), None);
    }
}
