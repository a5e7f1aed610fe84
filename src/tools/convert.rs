//! Integer base conversion and angle unit conversion.

use crate::core::AngleMode;
use crate::format::NumberFormat;
use thiserror::Error;

const DIGITS: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    #[error("Base {0} is outside the supported range 2-36")]
    InvalidBase(u32),

    #[error("'{input}' is not a valid base-{base} integer")]
    InvalidDigits { input: String, base: u32 },
}

/// Re-express an integer written in base `from` in base `to`.
///
/// Output digits above 9 are uppercase.
///
/// # Example
///
/// ```rust
/// use scicalc::tools::convert_base;
///
/// assert_eq!(convert_base("255", 10, 16).unwrap(), "FF");
/// assert_eq!(convert_base("ff", 16, 2).unwrap(), "11111111");
/// ```
pub fn convert_base(input: &str, from: u32, to: u32) -> Result<String, ConversionError> {
    check_base(from)?;
    check_base(to)?;

    let value = i64::from_str_radix(input.trim(), from).map_err(|_| {
        ConversionError::InvalidDigits {
            input: input.to_string(),
            base: from,
        }
    })?;
    Ok(to_radix(value, to))
}

/// `"<input> (base f) = <out> (base t)"`
pub fn describe_base_conversion(
    input: &str,
    from: u32,
    to: u32,
) -> Result<String, ConversionError> {
    let converted = convert_base(input, from, to)?;
    Ok(format!("{input} (base {from}) = {converted} (base {to})"))
}

pub fn convert_angle(value: f64, from: AngleMode, to: AngleMode) -> f64 {
    from.convert(value, to)
}

/// `"<value> <from> = <formatted> <to>"`
pub fn describe_angle_conversion(
    value: f64,
    from: AngleMode,
    to: AngleMode,
    format: &NumberFormat,
) -> String {
    let converted = convert_angle(value, from, to);
    format!(
        "{value} {} = {} {}",
        from.unit(),
        format.format(converted),
        to.unit()
    )
}

fn check_base(base: u32) -> Result<(), ConversionError> {
    if (2..=36).contains(&base) {
        Ok(())
    } else {
        Err(ConversionError::InvalidBase(base))
    }
}

fn to_radix(value: i64, radix: u32) -> String {
    let mut magnitude = value.unsigned_abs();
    if magnitude == 0 {
        return "0".to_string();
    }

    let radix = u64::from(radix);
    let mut digits = Vec::new();
    while magnitude > 0 {
        digits.push(DIGITS[(magnitude % radix) as usize]);
        magnitude /= radix;
    }
    if value < 0 {
        digits.push(b'-');
    }
    digits.iter().rev().map(|&b| char::from(b)).collect()
}
