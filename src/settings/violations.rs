//! Settings violations and loading errors.

use std::path::PathBuf;
use thiserror::Error;

/// A single rule broken by a settings value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SettingsViolation {
    #[error("Decimal places ({value}) exceed the maximum of {max}")]
    DecimalPlacesTooLarge { value: usize, max: usize },

    #[error("History limit must be at least 1")]
    EmptyHistory,
}

/// Errors that can occur while loading or applying settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to read settings from {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse settings: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid settings: {}", join_violations(.0))]
    Invalid(Vec<SettingsViolation>),
}

fn join_violations(violations: &[SettingsViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
