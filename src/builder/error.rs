//! Build errors for session builders.

use crate::settings::SettingsError;
use thiserror::Error;

/// Errors that can occur when building a session.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Invalid session settings: {0}")]
    InvalidSettings(#[from] SettingsError),
}
