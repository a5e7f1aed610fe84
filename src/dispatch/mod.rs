//! Synchronous dispatch of actions onto a session.
//!
//! The front end decodes input events into [`Action`]s and applies them one
//! at a time with [`dispatch`]. Every call runs to completion and reports
//! what happened as a [`StepResult`].
//!
//! # Example
//!
//! ```rust
//! use scicalc::core::InputState;
//! use scicalc::dispatch::{dispatch, Action, StepResult};
//! use scicalc::session::CalculatorSession;
//!
//! let mut session = CalculatorSession::new();
//! for key in ["6", "*", "7", "Enter"] {
//!     let action = Action::from_key(key).unwrap();
//!     dispatch(&mut session, action);
//! }
//! assert_eq!(session.current_input(), "42");
//!
//! let step = dispatch(&mut session, Action::Clear);
//! assert_eq!(
//!     step,
//!     StepResult::Transitioned {
//!         from: InputState::WaitingForOperand,
//!         to: InputState::EnteringNumber,
//!     }
//! );
//! ```

mod action;

pub use action::{Action, UnknownAction};

use crate::core::{InputState, State};
use crate::session::{CalcError, CalculatorSession};
use tracing::trace;

/// Result of applying a single action
#[derive(Clone, Debug, PartialEq)]
pub enum StepResult {
    /// The action ran; the session moved between these states
    Transitioned { from: InputState, to: InputState },

    /// The action failed and the session now shows the error sentinel
    Failed { error: CalcError, state: InputState },

    /// The action was refused and the session is unchanged
    Rejected { reason: String },

    /// The action names a feature that is not implemented
    Unsupported { message: String },
}

impl StepResult {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Transitioned { .. })
    }
}

/// Apply `action` to `session`.
pub fn dispatch(session: &mut CalculatorSession, action: Action) -> StepResult {
    let from = session.state();

    let outcome: Result<(), CalcError> = match action {
        Action::Digit(digit) => {
            session.input_digit(digit);
            Ok(())
        }
        Action::Operator(op) => {
            session.input_operator(op);
            Ok(())
        }
        Action::Parenthesis(paren) => {
            session.input_parenthesis(paren);
            Ok(())
        }
        Action::Constant(constant) => {
            session.input_named_constant(constant);
            Ok(())
        }
        Action::Random => {
            session.input_random();
            Ok(())
        }
        Action::Answer => {
            session.input_answer();
            Ok(())
        }
        Action::ToggleSign => {
            session.toggle_sign();
            Ok(())
        }
        Action::Delete => {
            session.delete();
            Ok(())
        }
        Action::Clear => {
            session.clear();
            Ok(())
        }
        Action::Evaluate => session.evaluate().map(drop),
        Action::Unary(function) => session.apply_unary(function).map(drop),
        Action::Trig(function) => session.apply_trig(function).map(drop),
        Action::InverseTrig(function) => session.apply_inverse_trig(function).map(drop),
        Action::MemoryClear => {
            session.memory_clear();
            Ok(())
        }
        Action::MemoryRecall => {
            session.memory_recall();
            Ok(())
        }
        Action::MemoryStore => {
            session.memory_store();
            Ok(())
        }
        Action::MemoryAdd => {
            session.memory_add();
            Ok(())
        }
        Action::MemorySubtract => {
            session.memory_subtract();
            Ok(())
        }
        Action::ClearHistory => {
            session.clear_history();
            Ok(())
        }
        Action::RecallHistory(index) => {
            if !session.recall_history(index) {
                return StepResult::Rejected {
                    reason: format!("No history entry {index}"),
                };
            }
            Ok(())
        }
        Action::SetAngleMode(mode) => {
            session.set_angle_mode(mode);
            Ok(())
        }
        Action::SetDisplayMode(mode) => {
            session.set_display_mode(mode);
            Ok(())
        }
        Action::SetDecimalPlaces(places) => {
            if let Err(error) = session.set_decimal_places(places) {
                return StepResult::Rejected {
                    reason: error.to_string(),
                };
            }
            Ok(())
        }
        Action::Complex(function) => {
            let message = match function.perform() {
                Ok(message) => message,
                Err(unsupported) => unsupported.to_string(),
            };
            return StepResult::Unsupported { message };
        }
    };

    match outcome {
        Ok(()) => {
            let to = session.state();
            trace!(?action, from = from.name(), to = to.name(), "Dispatched action");
            StepResult::Transitioned { from, to }
        }
        Err(error) => StepResult::Failed {
            error,
            state: session.state(),
        },
    }
}
