//! Scicalc: the engine behind a scientific calculator keypad
//!
//! Scicalc keeps the front end thin. A collaborator (a GUI, a web view, the
//! bundled command line) decodes key presses into actions and renders what
//! the session exposes; everything else lives here.
//!
//! # Core Concepts
//!
//! - **Session**: the input and expression buffers, memory, last result and
//!   history, mutated one operation at a time
//! - **States**: `EnteringNumber`, `ShowingValue`, `WaitingForOperand` and
//!   `Error`, derived from the session
//! - **Evaluation**: a safe recursive-descent evaluator over `f64`, with
//!   angle-mode rewriting of `sin`/`cos`/`tan` arguments
//! - **Formatting**: one deterministic function turning numbers into text
//! - **Dispatch**: keys and button names decoded into actions
//!
//! # Example
//!
//! ```rust
//! use scicalc::core::InputState;
//! use scicalc::session::{CalculatorSession, Operator, UnaryFunction};
//!
//! let mut session = CalculatorSession::new();
//! session.input_digit('2');
//! session.input_operator(Operator::Add);
//! session.input_digit('9');
//! session.apply_unary(UnaryFunction::Sqrt).unwrap();
//!
//! assert_eq!(session.display_text(), "2 + 3");
//! assert_eq!(session.evaluate().unwrap(), 5.0);
//! assert_eq!(session.state(), InputState::WaitingForOperand);
//! ```

pub mod builder;
pub mod core;
pub mod dispatch;
pub mod eval;
pub mod format;
pub mod session;
pub mod settings;
pub mod snapshot;
pub mod tools;

// Re-export commonly used types
pub use builder::{BuildError, SessionBuilder};
pub use core::{AngleMode, InputState, State};
pub use dispatch::{dispatch, Action, StepResult};
pub use format::{format_number, DisplayMode, NumberFormat};
pub use session::{CalcError, CalculatorSession};
pub use settings::Settings;
