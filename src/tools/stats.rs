//! Descriptive statistics over comma-separated data.

use crate::format::NumberFormat;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatsError {
    #[error("No valid data entered")]
    NoData,

    #[error("{0} is not implemented")]
    NotImplemented(&'static str),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StatOperation {
    Mean,
    Median,
    Mode,
    StdDev,
    Variance,
    Sum,
    Count,
    Quartiles,
    /// Needs paired data
    Regression,
    /// Needs paired data
    Correlation,
}

impl StatOperation {
    pub const ALL: [StatOperation; 10] = [
        Self::Mean,
        Self::Median,
        Self::Mode,
        Self::StdDev,
        Self::Variance,
        Self::Sum,
        Self::Count,
        Self::Quartiles,
        Self::Regression,
        Self::Correlation,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Mean => "mean",
            Self::Median => "median",
            Self::Mode => "mode",
            Self::StdDev => "stddev",
            Self::Variance => "variance",
            Self::Sum => "sum",
            Self::Count => "count",
            Self::Quartiles => "quartiles",
            Self::Regression => "regression",
            Self::Correlation => "correlation",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|op| op.name() == name)
    }

    pub fn compute(self, data: &[f64]) -> Result<StatValue, StatsError> {
        if data.is_empty() {
            return Err(StatsError::NoData);
        }

        let value = match self {
            Self::Mean => StatValue::Scalar(mean(data)),
            Self::Median => StatValue::Scalar(median(&sorted(data))),
            Self::Mode => StatValue::Scalar(mode(data)),
            Self::StdDev => StatValue::Scalar(variance(data).sqrt()),
            Self::Variance => StatValue::Scalar(variance(data)),
            Self::Sum => StatValue::Scalar(data.iter().sum()),
            Self::Count => StatValue::Scalar(data.len() as f64),
            Self::Quartiles => quartiles(data),
            Self::Regression | Self::Correlation => {
                return Err(StatsError::NotImplemented(self.name()))
            }
        };
        Ok(value)
    }

    /// Parse `raw`, compute, and render as `"MEAN: 2.5"`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use scicalc::format::NumberFormat;
    /// use scicalc::tools::StatOperation;
    ///
    /// let report = StatOperation::Median.report("3, 1, x, 2", &NumberFormat::default());
    /// assert_eq!(report.unwrap(), "MEDIAN: 2");
    /// ```
    pub fn report(self, raw: &str, format: &NumberFormat) -> Result<String, StatsError> {
        let value = self.compute(&parse_data(raw))?;
        Ok(format!(
            "{}: {}",
            self.name().to_uppercase(),
            value.render(format)
        ))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StatValue {
    Scalar(f64),
    Quartiles { q1: f64, q2: f64, q3: f64 },
}

impl StatValue {
    pub fn render(&self, format: &NumberFormat) -> String {
        match self {
            Self::Scalar(value) => format.format(*value),
            Self::Quartiles { q1, q2, q3 } => format!(
                "Q1 = {}, Q2 = {}, Q3 = {}",
                format.format(*q1),
                format.format(*q2),
                format.format(*q3)
            ),
        }
    }
}

/// Split on commas and keep every item that parses as a number.
pub fn parse_data(raw: &str) -> Vec<f64> {
    raw.split(',')
        .filter_map(|item| item.trim().parse::<f64>().ok())
        .filter(|value| !value.is_nan())
        .collect()
}

fn sorted(data: &[f64]) -> Vec<f64> {
    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    sorted
}

fn mean(data: &[f64]) -> f64 {
    data.iter().sum::<f64>() / data.len() as f64
}

/// Population variance.
fn variance(data: &[f64]) -> f64 {
    let mean = mean(data);
    data.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / data.len() as f64
}

/// Median of already sorted, non-empty data.
fn median(sorted: &[f64]) -> f64 {
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

/// Most frequent value; the smallest wins ties.
fn mode(data: &[f64]) -> f64 {
    let sorted = sorted(data);
    let mut best = (sorted[0], 0usize);
    let mut run = (sorted[0], 0usize);

    for &value in &sorted {
        if value == run.0 {
            run.1 += 1;
        } else {
            run = (value, 1);
        }
        if run.1 > best.1 {
            best = run;
        }
    }
    best.0
}

fn quartiles(data: &[f64]) -> StatValue {
    let sorted = sorted(data);
    let q2 = median(&sorted);
    if sorted.len() < 2 {
        return StatValue::Quartiles { q1: q2, q2, q3: q2 };
    }

    let half = sorted.len() / 2;
    let upper_start = (sorted.len() + 1) / 2;
    StatValue::Quartiles {
        q1: median(&sorted[..half]),
        q2,
        q3: median(&sorted[upper_start..]),
    }
}
