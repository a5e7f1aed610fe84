//! The calculator session: input buffer, expression buffer and registers.
//!
//! A [`CalculatorSession`] is an exclusively owned value. Every operation
//! runs to completion and leaves the session in one of the [`InputState`]s.
//! Failures never panic; the current input becomes [`ERROR_SENTINEL`] and
//! the error is returned so the caller can flash it and later [`clear`].
//!
//! [`clear`]: CalculatorSession::clear
//!
//! # Example
//!
//! ```rust
//! use scicalc::session::{CalculatorSession, Operator};
//!
//! let mut session = CalculatorSession::new();
//! session.input_digit('5');
//! session.input_operator(Operator::Add);
//! session.input_operator(Operator::Subtract);
//! session.input_digit('3');
//!
//! assert_eq!(session.evaluate().unwrap(), 2.0);
//! assert_eq!(session.current_input(), "2");
//! assert_eq!(session.history().lines(), vec!["5 - 3 = 2"]);
//! ```

mod error;
mod functions;
mod input;

pub use error::{CalcError, DomainError, ERROR_SENTINEL};
pub use functions::{factorial, InverseTrigFunction, TrigFunction, UnaryFunction};
pub use input::{Constant, Operator, Paren};

use crate::core::{AngleMode, CalculationHistory, HistoryEntry, InputState};
use crate::eval::{self, preprocess};
use crate::format::{DisplayMode, NumberFormat};
use crate::settings::{rules, Settings, SettingsError};
use rand::Rng;
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use tracing::{debug, warn};

const INITIAL_INPUT: &str = "0";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CalculatorSession {
    current_input: String,
    current_expression: String,
    waiting_for_new_number: bool,
    overwrite_input: bool,
    angle_mode: AngleMode,
    memory: f64,
    last_result: f64,
    format: NumberFormat,
    history: CalculationHistory,
}

impl Default for CalculatorSession {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorSession {
    /// Fresh session with default settings.
    pub fn new() -> Self {
        Self::with_settings(&Settings::default())
    }

    /// Fresh session configured from already validated settings.
    pub fn with_settings(settings: &Settings) -> Self {
        Self {
            current_input: INITIAL_INPUT.to_string(),
            current_expression: String::new(),
            waiting_for_new_number: false,
            overwrite_input: false,
            angle_mode: settings.angle_mode,
            memory: 0.0,
            last_result: 0.0,
            format: settings.number_format(),
            history: CalculationHistory::with_limit(settings.history_limit),
        }
    }

    /// Operand being entered, or the `"Error"` sentinel.
    pub fn current_input(&self) -> &str {
        &self.current_input
    }

    /// Expression built so far, without the current operand.
    pub fn current_expression(&self) -> &str {
        &self.current_expression
    }

    /// Whether the next digit starts a new operand.
    pub fn is_waiting_for_operand(&self) -> bool {
        self.waiting_for_new_number
    }

    /// Unit used by trigonometric functions.
    pub fn angle_mode(&self) -> AngleMode {
        self.angle_mode
    }

    /// Memory register; always finite.
    pub fn memory(&self) -> f64 {
        self.memory
    }

    /// Value of the last successful evaluation, recalled by `ans`.
    pub fn last_result(&self) -> f64 {
        self.last_result
    }

    /// Display mode and precision used for every formatted value.
    pub fn number_format(&self) -> NumberFormat {
        self.format
    }

    /// Display mode for results.
    pub fn display_mode(&self) -> DisplayMode {
        self.format.mode
    }

    /// Decimal places for results.
    pub fn decimal_places(&self) -> usize {
        self.format.decimal_places
    }

    /// Past evaluations, most recent first.
    pub fn history(&self) -> &CalculationHistory {
        &self.history
    }

    /// Current state, derived from the buffers and flags.
    pub fn state(&self) -> InputState {
        if self.is_error() {
            InputState::Error
        } else if self.waiting_for_new_number {
            InputState::WaitingForOperand
        } else if self.overwrite_input {
            InputState::ShowingValue
        } else {
            InputState::EnteringNumber
        }
    }

    /// Whether the current input holds the error sentinel.
    pub fn is_error(&self) -> bool {
        self.current_input == ERROR_SENTINEL
    }

    /// Text for the main display line: the pending expression followed by
    /// the operand being entered.
    pub fn display_text(&self) -> String {
        if self.is_error() {
            return self.current_input.clone();
        }
        let mut text = self.current_expression.clone();
        if !self.waiting_for_new_number {
            text.push_str(&self.current_input);
        }
        if text.trim().is_empty() {
            self.current_input.clone()
        } else {
            text
        }
    }

    // Entry

    /// Enter a digit or the decimal point. Other characters are ignored.
    pub fn input_digit(&mut self, digit: char) {
        if !digit.is_ascii_digit() && digit != '.' {
            return;
        }

        if self.waiting_for_new_number || self.overwrite_input || self.is_error() {
            self.current_input = if digit == '.' {
                "0.".to_string()
            } else {
                digit.to_string()
            };
            self.waiting_for_new_number = false;
            self.overwrite_input = false;
            return;
        }

        if digit == '.' {
            if !self.current_input.contains('.') {
                self.current_input.push('.');
            }
        } else if self.current_input == "0" {
            self.current_input = digit.to_string();
        } else if self.current_input == "-0" {
            self.current_input = format!("-{digit}");
        } else {
            self.current_input.push(digit);
        }
    }

    /// Enter a binary operator. Consecutive operators replace each other.
    pub fn input_operator(&mut self, op: Operator) {
        if self.is_error() {
            return;
        }

        if !self.waiting_for_new_number {
            self.push_operand_and_operator(op);
        } else if let Some(previous) = trailing_operator(&self.current_expression) {
            let cut = self.current_expression.len() - previous.symbol().len_utf8() - 2;
            self.current_expression.truncate(cut);
            self.push_operator(op);
        } else if self.current_expression.ends_with(')') {
            self.push_operator(op);
        } else if self.current_expression.is_empty() {
            // Continue from the value on display.
            self.push_operand_and_operator(op);
        }
    }

    /// Append a parenthesis to the expression; `)` first commits the operand
    /// being entered.
    pub fn input_parenthesis(&mut self, paren: Paren) {
        if paren == Paren::Close
            && matches!(
                self.state(),
                InputState::EnteringNumber | InputState::ShowingValue
            )
        {
            self.current_expression.push_str(&self.current_input);
            self.waiting_for_new_number = true;
            self.overwrite_input = false;
        }
        self.current_expression.push(paren.symbol());
    }

    /// Replace the current input with a formatted value. A NaN or infinite
    /// value puts the session in the error state instead.
    pub fn input_constant(&mut self, value: f64) {
        if value.is_finite() {
            self.show_value(value);
        } else {
            self.fail(DomainError::NonFinite(value).into());
        }
    }

    /// Insert `pi`, `e` or another named constant.
    pub fn input_named_constant(&mut self, constant: Constant) {
        self.input_constant(constant.value());
    }

    /// Uniform random value in `[0, 1)`.
    pub fn input_random(&mut self) {
        let value: f64 = rand::thread_rng().gen();
        self.input_constant(value);
    }

    /// Load the last evaluated result.
    pub fn input_answer(&mut self) {
        self.input_constant(self.last_result);
    }

    // Editing

    pub fn toggle_sign(&mut self) {
        if self.current_input == "0" || self.is_error() {
            return;
        }
        self.current_input = match self.current_input.strip_prefix('-') {
            Some(rest) => rest.to_string(),
            None => format!("-{}", self.current_input),
        };
    }

    /// Remove the last character of the current input.
    pub fn delete(&mut self) {
        if self.is_error() {
            self.current_input = INITIAL_INPUT.to_string();
            return;
        }
        self.current_input.pop();
        if self.current_input.is_empty() || self.current_input == "-" {
            self.current_input = INITIAL_INPUT.to_string();
        }
        self.overwrite_input = false;
    }

    /// Reset the input and expression. Memory, history and settings stay.
    pub fn clear(&mut self) {
        self.current_input = INITIAL_INPUT.to_string();
        self.current_expression.clear();
        self.waiting_for_new_number = false;
        self.overwrite_input = false;
    }

    // Evaluation

    /// Evaluate the pending expression.
    pub fn evaluate(&mut self) -> Result<f64, CalcError> {
        let mut expression = self.current_expression.clone();
        if !self.waiting_for_new_number || expression.is_empty() {
            expression.push_str(&self.current_input);
        }
        if expression.trim().is_empty() {
            expression = INITIAL_INPUT.to_string();
        }

        let prepared = preprocess(&expression, self.angle_mode);
        match eval::evaluate(&prepared) {
            Ok(value) => {
                let formatted = self.format.format(value);
                debug!(expression = %prepared, result = %formatted, "Evaluated expression");

                self.history = self
                    .history
                    .record(HistoryEntry::new(prepared, formatted.clone()));
                self.last_result = value;
                self.current_input = formatted;
                self.current_expression.clear();
                self.waiting_for_new_number = true;
                self.overwrite_input = false;
                Ok(value)
            }
            Err(error) => Err(self.fail(error.into())),
        }
    }

    // Functions

    pub fn apply_unary(&mut self, function: UnaryFunction) -> Result<f64, CalcError> {
        let result = self.current_value().and_then(|x| function.apply(x));
        self.show_result(function.name(), result)
    }

    pub fn apply_trig(&mut self, function: TrigFunction) -> Result<f64, CalcError> {
        let mode = self.angle_mode;
        let result = self.current_value().and_then(|x| function.apply(x, mode));
        self.show_result(function.name(), result)
    }

    pub fn apply_inverse_trig(
        &mut self,
        function: InverseTrigFunction,
    ) -> Result<f64, CalcError> {
        let mode = self.angle_mode;
        let result = self.current_value().and_then(|x| function.apply(x, mode));
        self.show_result(function.name(), result)
    }

    // Memory

    /// `mc`: reset memory to zero.
    pub fn memory_clear(&mut self) {
        self.memory = 0.0;
    }

    /// `mr`: show the memory value as the current input.
    pub fn memory_recall(&mut self) {
        self.input_constant(self.memory);
    }

    /// `ms`: store the current input; unparsable input counts as zero.
    pub fn memory_store(&mut self) {
        self.set_memory(self.input_or_zero());
    }

    /// `m+`: add the current input to memory.
    pub fn memory_add(&mut self) {
        self.set_memory(self.memory + self.input_or_zero());
    }

    /// `m-`: subtract the current input from memory.
    pub fn memory_subtract(&mut self) {
        self.set_memory(self.memory - self.input_or_zero());
    }

    // History

    /// Drop every history entry.
    pub fn clear_history(&mut self) {
        self.history = self.history.cleared();
    }

    /// Load the result of a history entry (0 is the most recent) as the
    /// current input. Returns `false` when there is no such entry.
    pub fn recall_history(&mut self, index: usize) -> bool {
        let Some(result) = self.history.get(index).map(|entry| entry.result.clone()) else {
            return false;
        };
        self.current_input = result;
        self.waiting_for_new_number = false;
        self.overwrite_input = true;
        true
    }

    // Settings

    /// Change the unit used by trigonometric functions.
    pub fn set_angle_mode(&mut self, mode: AngleMode) {
        self.angle_mode = mode;
    }

    /// Change the display mode of later results.
    pub fn set_display_mode(&mut self, mode: DisplayMode) {
        self.format.mode = mode;
    }

    /// Change the precision of later results. Values above the maximum are
    /// rejected and the current precision is kept.
    pub fn set_decimal_places(&mut self, places: usize) -> Result<(), SettingsError> {
        match rules::check_decimal_places(places) {
            Validation::Success(_) => {
                self.format.decimal_places = places;
                Ok(())
            }
            Validation::Failure(errors) => {
                Err(SettingsError::Invalid(errors.iter().cloned().collect()))
            }
        }
    }

    // Helpers

    fn push_operand_and_operator(&mut self, op: Operator) {
        self.current_expression.push_str(&self.current_input);
        self.push_operator(op);
    }

    fn push_operator(&mut self, op: Operator) {
        self.current_expression.push(' ');
        self.current_expression.push(op.symbol());
        self.current_expression.push(' ');
        self.waiting_for_new_number = true;
        self.overwrite_input = false;
    }

    fn current_value(&self) -> Result<f64, DomainError> {
        self.current_input
            .parse::<f64>()
            .map_err(|_| DomainError::NotANumber(self.current_input.clone()))
    }

    fn input_or_zero(&self) -> f64 {
        self.current_input.parse().unwrap_or(0.0)
    }

    /// Memory only ever holds finite values; anything else is dropped.
    fn set_memory(&mut self, value: f64) {
        if value.is_finite() {
            self.memory = value;
        } else {
            warn!(value, memory = self.memory, "Memory left unchanged");
        }
    }

    fn show_value(&mut self, value: f64) {
        self.current_input = self.format.format(value);
        self.waiting_for_new_number = false;
        self.overwrite_input = true;
    }

    fn show_result(
        &mut self,
        function: &str,
        result: Result<f64, DomainError>,
    ) -> Result<f64, CalcError> {
        match result {
            Ok(value) => {
                debug!(function, value, "Applied function");
                self.show_value(value);
                Ok(value)
            }
            Err(error) => Err(self.fail(error.into())),
        }
    }

    fn fail(&mut self, error: CalcError) -> CalcError {
        warn!(%error, expression = %self.current_expression, "Calculation failed");
        self.current_input = ERROR_SENTINEL.to_string();
        self.waiting_for_new_number = false;
        self.overwrite_input = false;
        error
    }
}

/// Operator at the end of an expression written as `" <op> "`.
fn trailing_operator(expression: &str) -> Option<Operator> {
    let mut tail = expression.chars().rev();
    match (tail.next(), tail.next(), tail.next()) {
        (Some(' '), Some(symbol), Some(' ')) => Operator::from_symbol(symbol),
        _ => None,
    }
}
