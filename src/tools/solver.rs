//! Linear and quadratic equation solver.

use crate::format::NumberFormat;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EquationKind {
    /// `ax + b = 0`
    Linear,
    /// `ax² + bx + c = 0`
    Quadratic,
}

impl EquationKind {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "linear" => Some(Self::Linear),
            "quadratic" => Some(Self::Quadratic),
            _ => None,
        }
    }

    pub fn coefficient_count(self) -> usize {
        match self {
            Self::Linear => 2,
            Self::Quadratic => 3,
        }
    }

    /// Solve from raw coefficient text; missing or unparsable ones are 0.
    pub fn solve(self, coefficients: &[&str]) -> Solution {
        let coefficient = |i: usize| coefficients.get(i).map_or(0.0, |raw| parse_coefficient(raw));
        match self {
            Self::Linear => solve_linear(coefficient(0), coefficient(1)),
            Self::Quadratic => solve_quadratic(coefficient(0), coefficient(1), coefficient(2)),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Solution {
    Single(f64),
    DoubleRoot(f64),
    TwoRoots(f64, f64),
    Infinite,
    NoSolution,
    NoRealSolutions,
    NotQuadratic,
}

impl Solution {
    /// Render for display, one root per line.
    pub fn render(&self, format: &NumberFormat) -> String {
        match self {
            Self::Single(x) => format!("x = {}", format.format(*x)),
            Self::DoubleRoot(x) => format!("x = {} (double root)", format.format(*x)),
            Self::TwoRoots(x1, x2) => format!(
                "x₁ = {}\nx₂ = {}",
                format.format(*x1),
                format.format(*x2)
            ),
            Self::Infinite => "Infinite solutions".to_string(),
            Self::NoSolution => "No solution".to_string(),
            Self::NoRealSolutions => "No real solutions".to_string(),
            Self::NotQuadratic => "Not a quadratic equation".to_string(),
        }
    }
}

pub fn parse_coefficient(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

/// Solve `ax + b = 0`.
pub fn solve_linear(a: f64, b: f64) -> Solution {
    if a == 0.0 {
        if b == 0.0 {
            Solution::Infinite
        } else {
            Solution::NoSolution
        }
    } else {
        Solution::Single(-b / a)
    }
}

/// Solve `ax² + bx + c = 0` over the reals.
///
/// # Example
///
/// ```rust
/// use scicalc::tools::{solve_quadratic, Solution};
///
/// assert_eq!(solve_quadratic(1.0, -3.0, 2.0), Solution::TwoRoots(2.0, 1.0));
/// assert_eq!(solve_quadratic(1.0, 0.0, 1.0), Solution::NoRealSolutions);
/// ```
pub fn solve_quadratic(a: f64, b: f64, c: f64) -> Solution {
    if a == 0.0 {
        return Solution::NotQuadratic;
    }

    let discriminant = b * b - 4.0 * a * c;
    if discriminant > 0.0 {
        let root = discriminant.sqrt();
        Solution::TwoRoots((-b + root) / (2.0 * a), (-b - root) / (2.0 * a))
    } else if discriminant == 0.0 {
        Solution::DoubleRoot(-b / (2.0 * a))
    } else {
        Solution::NoRealSolutions
    }
}
