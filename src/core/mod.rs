//! Core calculator types.
//!
//! This module contains the pure building blocks shared by the session:
//! - The `State` trait and the derived `InputState`
//! - Angle units and their conversions
//! - Immutable, capped calculation history
//!
//! Nothing in this module performs I/O or holds mutable global state.

mod angle;
mod history;
mod state;

pub use angle::{AngleMode, UnknownAngleMode};
pub use history::{CalculationHistory, HistoryEntry, DEFAULT_HISTORY_LIMIT};
pub use state::{InputState, State};
