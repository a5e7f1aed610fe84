//! Numeric formatting for the display and the history.
//!
//! [`format_number`] is the single place where an `f64` becomes text; every
//! displayed or historized value goes through it. Exponential output uses a
//! signed exponent (`1.5e+3`, `2.0e-7`); engineering output keeps the
//! exponent a multiple of three and prints it unsigned when positive
//! (`12.5e3`).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default number of fractional digits.
pub const DEFAULT_DECIMAL_PLACES: usize = 10;

/// Largest accepted number of fractional digits.
pub const MAX_DECIMAL_PLACES: usize = 100;

/// Magnitude at and above which normal mode switches to exponential.
const LARGE_THRESHOLD: f64 = 1e15;

/// Magnitude below which (non-zero) normal mode switches to exponential.
const SMALL_THRESHOLD: f64 = 1e-6;

/// How numbers are rendered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    #[default]
    Normal,
    Scientific,
    Engineering,
}

impl DisplayMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Scientific => "scientific",
            Self::Engineering => "engineering",
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name a display mode.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Unknown display mode '{0}', expected normal, scientific or engineering")]
pub struct UnknownDisplayMode(pub String);

impl FromStr for DisplayMode {
    type Err = UnknownDisplayMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "normal" => Ok(Self::Normal),
            "scientific" | "sci" => Ok(Self::Scientific),
            "engineering" | "eng" => Ok(Self::Engineering),
            _ => Err(UnknownDisplayMode(s.to_string())),
        }
    }
}

/// Display mode plus precision, carried by the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberFormat {
    pub mode: DisplayMode,
    pub decimal_places: usize,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            mode: DisplayMode::Normal,
            decimal_places: DEFAULT_DECIMAL_PLACES,
        }
    }
}

impl NumberFormat {
    pub fn new(mode: DisplayMode, decimal_places: usize) -> Self {
        Self {
            mode,
            decimal_places,
        }
    }

    pub fn format(&self, num: f64) -> String {
        format_number(num, self.mode, self.decimal_places)
    }
}

/// Render `num` for display.
///
/// # Example
///
/// ```rust
/// use scicalc::format::{format_number, DisplayMode};
///
/// assert_eq!(format_number(42.0, DisplayMode::Normal, 0), "42");
/// assert_eq!(format_number(3.5, DisplayMode::Normal, 10), "3.5");
/// assert_eq!(format_number(1e16, DisplayMode::Normal, 2), "1.00e+16");
/// assert_eq!(format_number(1500.0, DisplayMode::Scientific, 2), "1.50e+3");
/// assert_eq!(format_number(12500.0, DisplayMode::Engineering, 1), "12.5e3");
/// assert_eq!(format_number(f64::NEG_INFINITY, DisplayMode::Normal, 2), "-∞");
/// ```
pub fn format_number(num: f64, mode: DisplayMode, decimal_places: usize) -> String {
    if num.is_nan() {
        return "0".to_string();
    }
    if num.is_infinite() {
        return if num > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    match mode {
        DisplayMode::Scientific => exponential(num, decimal_places),
        DisplayMode::Engineering => engineering(num, decimal_places),
        DisplayMode::Normal => {
            let magnitude = num.abs();
            if magnitude >= LARGE_THRESHOLD || (magnitude < SMALL_THRESHOLD && num != 0.0) {
                exponential(num, decimal_places)
            } else {
                fixed_trimmed(num, decimal_places)
            }
        }
    }
}

/// Exponential notation with a signed exponent.
fn exponential(num: f64, decimal_places: usize) -> String {
    let rendered = format!("{:.*e}", decimal_places, num);
    match rendered.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => rendered,
    }
}

fn engineering(num: f64, decimal_places: usize) -> String {
    let exponent = if num == 0.0 {
        0
    } else {
        ((num.abs().log10() / 3.0).floor() * 3.0) as i32
    };
    let mantissa = num / 10f64.powi(exponent);
    format!("{:.*}e{}", decimal_places, mantissa, exponent)
}

/// Fixed-point, then trailing fractional zeros and a bare point removed.
fn fixed_trimmed(num: f64, decimal_places: usize) -> String {
    let rendered = format!("{:.*}", decimal_places, num);
    let trimmed = if rendered.contains('.') {
        rendered.trim_end_matches('0').trim_end_matches('.')
    } else {
        rendered.as_str()
    };
    match trimmed {
        "-0" => "0".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_render_exactly_without_decimals() {
        assert_eq!(format_number(42.0, DisplayMode::Normal, 0), "42");
        assert_eq!(format_number(420.0, DisplayMode::Normal, 0), "420");
        assert_eq!(format_number(0.0, DisplayMode::Normal, 0), "0");
        assert_eq!(format_number(100.0, DisplayMode::Normal, 10), "100");
    }

    #[test]
    fn trailing_zeros_are_stripped() {
        assert_eq!(format_number(3.5, DisplayMode::Normal, 10), "3.5");
        assert_eq!(format_number(-2.25, DisplayMode::Normal, 10), "-2.25");
        assert_eq!(format_number(2.0, DisplayMode::Normal, 4), "2");
    }

    #[test]
    fn rounds_to_decimal_places() {
        assert_eq!(format_number(1.0 / 3.0, DisplayMode::Normal, 4), "0.3333");
        assert_eq!(format_number(2.0 / 3.0, DisplayMode::Normal, 3), "0.667");
    }

    #[test]
    fn tiny_values_use_exponential() {
        assert_eq!(
            format_number(0.0000001, DisplayMode::Normal, 10),
            "1.0000000000e-7"
        );
        assert_eq!(format_number(0.000001, DisplayMode::Normal, 10), "0.000001");
    }

    #[test]
    fn huge_values_use_exponential() {
        assert_eq!(
            format_number(1e16, DisplayMode::Normal, 10),
            "1.0000000000e+16"
        );
        assert_eq!(format_number(1e15, DisplayMode::Normal, 1), "1.0e+15");
        assert_eq!(
            format_number(999_999_999_999_999.0, DisplayMode::Normal, 0),
            "999999999999999"
        );
    }

    #[test]
    fn negative_zero_renders_as_zero() {
        assert_eq!(format_number(-0.0, DisplayMode::Normal, 3), "0");
    }

    #[test]
    fn nan_and_infinity() {
        assert_eq!(format_number(f64::NAN, DisplayMode::Scientific, 3), "0");
        assert_eq!(format_number(f64::INFINITY, DisplayMode::Normal, 3), "∞");
        assert_eq!(format_number(f64::NEG_INFINITY, DisplayMode::Engineering, 3), "-∞");
    }

    #[test]
    fn scientific_mode() {
        assert_eq!(format_number(1234.0, DisplayMode::Scientific, 3), "1.234e+3");
        assert_eq!(format_number(-0.00025, DisplayMode::Scientific, 1), "-2.5e-4");
        assert_eq!(format_number(0.0, DisplayMode::Scientific, 2), "0.00e+0");
        assert_eq!(format_number(42.0, DisplayMode::Scientific, 0), "4e+1");
    }

    #[test]
    fn engineering_mode() {
        assert_eq!(format_number(12345.0, DisplayMode::Engineering, 3), "12.345e3");
        assert_eq!(format_number(0.0025, DisplayMode::Engineering, 1), "2.5e-3");
        assert_eq!(format_number(-470.0, DisplayMode::Engineering, 0), "-470e0");
        assert_eq!(format_number(0.0, DisplayMode::Engineering, 2), "0.00e0");
    }

    #[test]
    fn number_format_delegates() {
        let format = NumberFormat::new(DisplayMode::Normal, 2);
        assert_eq!(format.format(2.001), "2");
        assert_eq!(NumberFormat::default().format(0.1 + 0.2), "0.3");
    }

    #[test]
    fn display_mode_parses() {
        assert_eq!("Scientific".parse::<DisplayMode>().unwrap(), DisplayMode::Scientific);
        assert_eq!("eng".parse::<DisplayMode>().unwrap(), DisplayMode::Engineering);
        assert!("fancy".parse::<DisplayMode>().is_err());
    }
}
