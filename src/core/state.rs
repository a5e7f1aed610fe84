//! State trait and the input states of the calculator session.
//!
//! The session itself is a plain struct; its conceptual state is derived
//! from its fields and described by [`InputState`], which implements the
//! [`State`] trait so transitions can be named and logged uniformly.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// A named machine state.
///
/// # Example
///
/// ```rust
/// use scicalc::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Panel {
///     Keypad,
///     Broken,
/// }
///
/// impl State for Panel {
///     fn name(&self) -> &str {
///         match self {
///             Self::Keypad => "Keypad",
///             Self::Broken => "Broken",
///         }
///     }
///
///     fn is_error(&self) -> bool {
///         matches!(self, Self::Broken)
///     }
/// }
///
/// assert_eq!(Panel::Keypad.name(), "Keypad");
/// assert!(Panel::Broken.is_error());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Stable name used in logs and snapshots.
    fn name(&self) -> &str;

    /// Whether the machine is showing an error. Defaults to `false`.
    fn is_error(&self) -> bool {
        false
    }
}

crate::state_enum! {
    /// Conceptual state of the number-entry machine.
    ///
    /// - `EnteringNumber`: digits extend the current input.
    /// - `ShowingValue`: a computed value (function result, constant, memory
    ///   recall) is displayed; it is a pending operand, but the next digit
    ///   starts a new number.
    /// - `WaitingForOperand`: an operator (or evaluation) was just entered.
    /// - `Error`: the current input holds the `"Error"` sentinel.
    #[derive(Copy, Eq, Hash)]
    pub enum InputState {
        EnteringNumber,
        ShowingValue,
        WaitingForOperand,
        Error,
    }
    error: [Error]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_state_names_match_variants() {
        let names: Vec<&str> = InputState::ALL.iter().map(State::name).collect();
        assert_eq!(
            names,
            ["EnteringNumber", "ShowingValue", "WaitingForOperand", "Error"]
        );
    }

    #[test]
    fn only_error_state_is_error() {
        for state in InputState::ALL {
            assert_eq!(state.is_error(), *state == InputState::Error);
        }
    }

    #[test]
    fn input_state_serializes_correctly() {
        let json = serde_json::to_string(&InputState::WaitingForOperand).unwrap();
        assert_eq!(json, "\"WaitingForOperand\"");
        let back: InputState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, InputState::WaitingForOperand);
    }
}
