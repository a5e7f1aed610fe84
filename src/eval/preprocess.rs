//! Textual rewrites applied before evaluation.
//!
//! The angle rewrite is a plain regex substitution, not a tree transform:
//! the argument of `sin(`, `cos(` and `tan(` runs up to the first `)`, so a
//! nested group inside a trigonometric call is not handled. The function
//! name must start at a word boundary, so `asin(`, `acos(` and `atan(`
//! are never rewritten; inverse functions already return radians and are
//! converted by the session instead.

use crate::core::AngleMode;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Forward trigonometric call with a single, paren-free argument.
    static ref TRIG_CALL: Regex = Regex::new(r"\b(sin|cos|tan)\(([^)]+)\)").unwrap();
}

/// Replace display operator glyphs with their ASCII equivalents.
pub fn normalize_operators(expr: &str) -> String {
    expr.replace('×', "*").replace('÷', "/").replace('−', "-")
}

/// Rewrite forward trig arguments so they are interpreted in `mode`.
///
/// # Example
///
/// ```rust
/// use scicalc::core::AngleMode;
/// use scicalc::eval::preprocess;
///
/// assert_eq!(preprocess("sin(30)", AngleMode::Deg), "sin((30) * pi / 180)");
/// assert_eq!(preprocess("cos(50)", AngleMode::Grad), "cos((50) * pi / 200)");
/// assert_eq!(preprocess("tan(1)", AngleMode::Rad), "tan(1)");
/// ```
pub fn preprocess(expr: &str, mode: AngleMode) -> String {
    let expr = normalize_operators(expr);
    let divisor = match mode {
        AngleMode::Rad => return expr,
        AngleMode::Deg => "180",
        AngleMode::Grad => "200",
    };
    TRIG_CALL
        .replace_all(&expr, format!("${{1}}((${{2}}) * pi / {divisor})").as_str())
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degree_mode_rewrites_every_call() {
        assert_eq!(
            preprocess("sin(30) + cos(60)", AngleMode::Deg),
            "sin((30) * pi / 180) + cos((60) * pi / 180)"
        );
    }

    #[test]
    fn gradian_mode_uses_two_hundred() {
        assert_eq!(
            preprocess("tan(50)", AngleMode::Grad),
            "tan((50) * pi / 200)"
        );
    }

    #[test]
    fn radian_mode_leaves_calls_alone() {
        assert_eq!(preprocess("sin(1) * 2", AngleMode::Rad), "sin(1) * 2");
    }

    #[test]
    fn inverse_functions_are_not_rewritten() {
        assert_eq!(preprocess("asin(0.5)", AngleMode::Deg), "asin(0.5)");
        assert_eq!(preprocess("atan(1)", AngleMode::Grad), "atan(1)");
    }

    #[test]
    fn nested_groups_are_cut_at_first_close() {
        assert_eq!(
            preprocess("sin((30))", AngleMode::Deg),
            "sin(((30) * pi / 180))"
        );
    }

    #[test]
    fn operator_glyphs_are_normalized() {
        assert_eq!(preprocess("6 × 2 ÷ 3 − 1", AngleMode::Rad), "6 * 2 / 3 - 1");
    }

    #[test]
    fn expressions_without_trig_are_untouched() {
        assert_eq!(preprocess("5 - 3", AngleMode::Deg), "5 - 3");
    }
}
