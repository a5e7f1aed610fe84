//! Calculator settings.
//!
//! Settings can be built in code, parsed from TOML, or loaded from a file.
//! Missing keys fall back to defaults; unknown keys are rejected.
//!
//! ```toml
//! decimal_places = 6
//! display_mode = "engineering"
//! angle_mode = "rad"
//! history_limit = 50
//! ```
//!
//! # Example
//!
//! ```rust
//! use scicalc::core::AngleMode;
//! use scicalc::settings::Settings;
//!
//! let settings = Settings::from_toml_str("angle_mode = \"grad\"").unwrap();
//! assert_eq!(settings.angle_mode, AngleMode::Grad);
//! assert_eq!(settings.decimal_places, 10);
//!
//! assert!(Settings::from_toml_str("decimal_places = 1000").is_err());
//! ```

pub mod rules;
pub mod violations;

pub use violations::{SettingsError, SettingsViolation};

use crate::core::{AngleMode, DEFAULT_HISTORY_LIMIT};
use crate::format::{DisplayMode, NumberFormat, DEFAULT_DECIMAL_PLACES};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use stillwater::validation::Validation;

/// File name looked up under the user's configuration directory.
pub const SETTINGS_FILE: &str = "settings.toml";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub decimal_places: usize,
    pub display_mode: DisplayMode,
    pub angle_mode: AngleMode,
    pub history_limit: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            decimal_places: DEFAULT_DECIMAL_PLACES,
            display_mode: DisplayMode::Normal,
            angle_mode: AngleMode::Deg,
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

impl Settings {
    /// Parse and validate settings from TOML text.
    pub fn from_toml_str(raw: &str) -> Result<Self, SettingsError> {
        let settings: Settings = toml::from_str(raw)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read, parse and validate a settings file.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let raw = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }

    /// `<config dir>/scicalc/settings.toml`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("scicalc").join(SETTINGS_FILE))
    }

    /// Load the default settings file when it exists, defaults otherwise.
    pub fn load_default() -> Result<Self, SettingsError> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Check every rule, reporting all violations at once.
    pub fn validate(&self) -> Result<(), SettingsError> {
        match rules::enforce(self) {
            Validation::Success(_) => Ok(()),
            Validation::Failure(errors) => {
                Err(SettingsError::Invalid(errors.iter().cloned().collect()))
            }
        }
    }

    pub fn number_format(&self) -> NumberFormat {
        NumberFormat::new(self.display_mode, self.decimal_places)
    }
}
