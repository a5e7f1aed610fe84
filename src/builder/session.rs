//! Builder for constructing calculator sessions.

use crate::builder::error::BuildError;
use crate::core::AngleMode;
use crate::format::DisplayMode;
use crate::session::CalculatorSession;
use crate::settings::Settings;

/// Builder for constructing sessions with a fluent API.
///
/// Starts from default settings; every value is validated in [`build`].
///
/// [`build`]: SessionBuilder::build
///
/// # Example
///
/// ```rust
/// use scicalc::builder::SessionBuilder;
/// use scicalc::core::AngleMode;
/// use scicalc::format::DisplayMode;
///
/// let session = SessionBuilder::new()
///     .angle_mode(AngleMode::Rad)
///     .display_mode(DisplayMode::Engineering)
///     .decimal_places(3)
///     .build()
///     .unwrap();
///
/// assert_eq!(session.angle_mode(), AngleMode::Rad);
/// assert_eq!(session.decimal_places(), 3);
/// ```
#[derive(Clone, Debug, Default)]
pub struct SessionBuilder {
    settings: Settings,
}

impl SessionBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all settings at once.
    pub fn settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    pub fn angle_mode(mut self, mode: AngleMode) -> Self {
        self.settings.angle_mode = mode;
        self
    }

    pub fn display_mode(mut self, mode: DisplayMode) -> Self {
        self.settings.display_mode = mode;
        self
    }

    pub fn decimal_places(mut self, places: usize) -> Self {
        self.settings.decimal_places = places;
        self
    }

    /// Maximum number of history entries kept (at least 1).
    pub fn history_limit(mut self, limit: usize) -> Self {
        self.settings.history_limit = limit;
        self
    }

    /// Build the session.
    /// Returns an error listing every invalid setting.
    pub fn build(self) -> Result<CalculatorSession, BuildError> {
        self.settings.validate()?;
        Ok(CalculatorSession::with_settings(&self.settings))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Operator;
    use crate::settings::{SettingsError, SettingsViolation};

    #[test]
    fn default_builder_matches_new_session() {
        let session = SessionBuilder::new().build().unwrap();
        assert_eq!(session, CalculatorSession::new());
    }

    #[test]
    fn fluent_api_applies_settings() {
        let session = SessionBuilder::new()
            .angle_mode(AngleMode::Grad)
            .display_mode(DisplayMode::Scientific)
            .decimal_places(4)
            .history_limit(3)
            .build()
            .unwrap();

        assert_eq!(session.angle_mode(), AngleMode::Grad);
        assert_eq!(session.display_mode(), DisplayMode::Scientific);
        assert_eq!(session.decimal_places(), 4);
        assert_eq!(session.history().limit(), 3);
    }

    #[test]
    fn history_limit_is_honoured() {
        let mut session = SessionBuilder::new().history_limit(2).build().unwrap();
        for digit in ['1', '2', '3'] {
            session.input_digit(digit);
            session.input_operator(Operator::Add);
            session.input_digit('1');
            session.evaluate().unwrap();
        }
        assert_eq!(session.history().lines(), vec!["3 + 1 = 4", "2 + 1 = 3"]);
    }

    #[test]
    fn builder_validates_settings() {
        let result = SessionBuilder::new()
            .decimal_places(101)
            .history_limit(0)
            .build();

        match result {
            Err(BuildError::InvalidSettings(SettingsError::Invalid(violations))) => {
                assert_eq!(violations.len(), 2);
                assert!(violations.contains(&SettingsViolation::EmptyHistory));
            }
            other => panic!("Expected invalid settings, got {other:?}"),
        }
    }

    #[test]
    fn settings_can_be_supplied_whole() {
        let settings = Settings {
            angle_mode: AngleMode::Rad,
            ..Settings::default()
        };
        let session = SessionBuilder::new().settings(settings).build().unwrap();
        assert_eq!(session.angle_mode(), AngleMode::Rad);
    }
}
