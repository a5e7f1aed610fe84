//! Angle units used by trigonometric functions and conversions.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

/// Unit in which the calculator interprets and reports angles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AngleMode {
    #[default]
    Deg,
    Rad,
    Grad,
}

impl AngleMode {
    /// Size of a half turn in this unit.
    pub fn half_turn(self) -> f64 {
        match self {
            Self::Deg => 180.0,
            Self::Rad => PI,
            Self::Grad => 200.0,
        }
    }

    /// Convert a value expressed in this unit to radians.
    pub fn to_radians(self, value: f64) -> f64 {
        match self {
            Self::Rad => value,
            _ => value * PI / self.half_turn(),
        }
    }

    /// Convert a radian value into this unit.
    pub fn from_radians(self, radians: f64) -> f64 {
        match self {
            Self::Rad => radians,
            _ => radians * self.half_turn() / PI,
        }
    }

    /// Convert `value` from this unit into `target`.
    pub fn convert(self, value: f64, target: AngleMode) -> f64 {
        target.from_radians(self.to_radians(value))
    }

    /// Short lowercase unit name (`deg`, `rad`, `grad`).
    pub fn unit(self) -> &'static str {
        match self {
            Self::Deg => "deg",
            Self::Rad => "rad",
            Self::Grad => "grad",
        }
    }

    /// Indicator label shown by the display (`DEG`, `RAD`, `GRAD`).
    pub fn label(self) -> &'static str {
        match self {
            Self::Deg => "DEG",
            Self::Rad => "RAD",
            Self::Grad => "GRAD",
        }
    }
}

impl fmt::Display for AngleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned when a string does not name an angle unit.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Unknown angle mode '{0}', expected deg, rad or grad")]
pub struct UnknownAngleMode(pub String);

impl FromStr for AngleMode {
    type Err = UnknownAngleMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "deg" | "degrees" => Ok(Self::Deg),
            "rad" | "radians" => Ok(Self::Rad),
            "grad" | "gradians" => Ok(Self::Grad),
            _ => Err(UnknownAngleMode(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn degrees_convert_to_radians() {
        assert!(close(AngleMode::Deg.to_radians(180.0), PI));
        assert!(close(AngleMode::Deg.to_radians(90.0), PI / 2.0));
    }

    #[test]
    fn gradians_convert_to_radians() {
        assert!(close(AngleMode::Grad.to_radians(200.0), PI));
        assert!(close(AngleMode::Grad.to_radians(100.0), PI / 2.0));
    }

    #[test]
    fn radians_are_unchanged() {
        assert_eq!(AngleMode::Rad.to_radians(1.25), 1.25);
        assert_eq!(AngleMode::Rad.from_radians(1.25), 1.25);
    }

    #[test]
    fn convert_between_units() {
        assert!(close(AngleMode::Deg.convert(90.0, AngleMode::Grad), 100.0));
        assert!(close(AngleMode::Grad.convert(400.0, AngleMode::Deg), 360.0));
        assert!(close(AngleMode::Rad.convert(PI, AngleMode::Deg), 180.0));
    }

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("DEG".parse::<AngleMode>().unwrap(), AngleMode::Deg);
        assert_eq!("rad".parse::<AngleMode>().unwrap(), AngleMode::Rad);
        assert_eq!(" Grad ".parse::<AngleMode>().unwrap(), AngleMode::Grad);
        assert!("turns".parse::<AngleMode>().is_err());
    }

    #[test]
    fn default_is_degrees() {
        assert_eq!(AngleMode::default(), AngleMode::Deg);
        assert_eq!(AngleMode::default().to_string(), "DEG");
    }
}
