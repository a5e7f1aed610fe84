//! Discrete actions decoded from keys and button names.

use crate::core::AngleMode;
use crate::format::DisplayMode;
use crate::session::{Constant, InverseTrigFunction, Operator, Paren, TrigFunction, UnaryFunction};
use crate::tools::ComplexFunction;
use std::str::FromStr;
use thiserror::Error;

/// One user action against a session.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Action {
    Digit(char),
    Operator(Operator),
    Parenthesis(Paren),
    Constant(Constant),
    Random,
    Answer,
    ToggleSign,
    Delete,
    Clear,
    Evaluate,
    Unary(UnaryFunction),
    Trig(TrigFunction),
    InverseTrig(InverseTrigFunction),
    MemoryClear,
    MemoryRecall,
    MemoryStore,
    MemoryAdd,
    MemorySubtract,
    ClearHistory,
    RecallHistory(usize),
    SetAngleMode(AngleMode),
    SetDisplayMode(DisplayMode),
    SetDecimalPlaces(usize),
    Complex(ComplexFunction),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown action '{0}'")]
pub struct UnknownAction(pub String);

impl Action {
    /// Decode a keyboard key (`"7"`, `"+"`, `"Enter"`, `"Backspace"`, ...).
    ///
    /// # Example
    ///
    /// ```rust
    /// use scicalc::dispatch::Action;
    /// use scicalc::session::Operator;
    ///
    /// assert_eq!(Action::from_key("Enter"), Some(Action::Evaluate));
    /// assert_eq!(Action::from_key("%"), Some(Action::Operator(Operator::Modulo)));
    /// assert_eq!(Action::from_key("q"), None);
    /// ```
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Enter" | "=" => return Some(Self::Evaluate),
            "Escape" => return Some(Self::Clear),
            "Backspace" => return Some(Self::Delete),
            _ => {}
        }

        let mut chars = key.chars();
        let (Some(c), None) = (chars.next(), chars.next()) else {
            return None;
        };
        if c.is_ascii_digit() || c == '.' {
            Some(Self::Digit(c))
        } else if let Some(op) = Operator::from_symbol(c) {
            Some(Self::Operator(op))
        } else {
            Paren::from_symbol(c).map(Self::Parenthesis)
        }
    }
}

impl FromStr for Action {
    type Err = UnknownAction;

    /// Decode a keypad button name, falling back to key bindings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        let action = match name {
            "clear" => Self::Clear,
            "delete" => Self::Delete,
            "equals" => Self::Evaluate,
            "sign" => Self::ToggleSign,
            "ans" => Self::Answer,
            "mc" => Self::MemoryClear,
            "mr" => Self::MemoryRecall,
            "ms" => Self::MemoryStore,
            "mplus" | "m+" => Self::MemoryAdd,
            "mminus" | "m-" => Self::MemorySubtract,
            "clear-history" => Self::ClearHistory,
            "pi" | "π" => Self::Constant(Constant::Pi),
            "e" => Self::Constant(Constant::E),
            "phi" => Self::Constant(Constant::Phi),
            "random" => Self::Random,
            "power" => Self::Operator(Operator::Power),
            "normal" | "scientific" | "engineering" => {
                Self::SetDisplayMode(name.parse().map_err(|_| unknown(s))?)
            }
            "deg" | "rad" | "grad" => {
                Self::SetAngleMode(name.parse().map_err(|_| unknown(s))?)
            }
            _ => return parse_named(name).ok_or_else(|| unknown(s)),
        };
        Ok(action)
    }
}

fn parse_named(name: &str) -> Option<Action> {
    if let Some(index) = name.strip_prefix("recall:") {
        return index.parse().ok().map(Action::RecallHistory);
    }
    if let Some(places) = name.strip_prefix("decimals:") {
        return places.parse().ok().map(Action::SetDecimalPlaces);
    }

    UnaryFunction::from_name(name)
        .map(Action::Unary)
        .or_else(|| TrigFunction::from_name(name).map(Action::Trig))
        .or_else(|| InverseTrigFunction::from_name(name).map(Action::InverseTrig))
        .or_else(|| ComplexFunction::from_name(name).map(Action::Complex))
        .or_else(|| Action::from_key(name))
}

fn unknown(s: &str) -> UnknownAction {
    UnknownAction(s.to_string())
}
