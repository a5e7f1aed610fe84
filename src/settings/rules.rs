//! Validation rules for settings.
//!
//! Every rule runs; all violations are accumulated rather than stopping at
//! the first one.

use super::violations::SettingsViolation;
use super::Settings;
use crate::format::MAX_DECIMAL_PLACES;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Check a decimal-places value on its own.
pub fn check_decimal_places(value: usize) -> Validation<(), NonEmptyVec<SettingsViolation>> {
    if value > MAX_DECIMAL_PLACES {
        Validation::fail(SettingsViolation::DecimalPlacesTooLarge {
            value,
            max: MAX_DECIMAL_PLACES,
        })
    } else {
        Validation::success(())
    }
}

fn check_history_limit(limit: usize) -> Validation<(), NonEmptyVec<SettingsViolation>> {
    if limit == 0 {
        Validation::fail(SettingsViolation::EmptyHistory)
    } else {
        Validation::success(())
    }
}

/// Enforce all rules, accumulating ALL violations.
pub fn enforce(settings: &Settings) -> Validation<(), NonEmptyVec<SettingsViolation>> {
    let checks: Vec<Validation<(), NonEmptyVec<SettingsViolation>>> = vec![
        check_decimal_places(settings.decimal_places),
        check_history_limit(settings.history_limit),
    ];

    Validation::all_vec(checks).map(|_| ())
}
