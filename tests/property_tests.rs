//! Property-based tests for formatting, entry and history.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use proptest::prelude::*;
use scicalc::core::{AngleMode, CalculationHistory, HistoryEntry, InputState, State};
use scicalc::format::{format_number, DisplayMode};
use scicalc::session::{CalculatorSession, InverseTrigFunction, Operator, TrigFunction};
use scicalc::SessionBuilder;

prop_compose! {
    fn arbitrary_mode()(variant in 0..3u8) -> DisplayMode {
        match variant {
            0 => DisplayMode::Normal,
            1 => DisplayMode::Scientific,
            _ => DisplayMode::Engineering,
        }
    }
}

prop_compose! {
    fn arbitrary_state()(variant in 0..4u8) -> InputState {
        match variant {
            0 => InputState::EnteringNumber,
            1 => InputState::ShowingValue,
            2 => InputState::WaitingForOperand,
            _ => InputState::Error,
        }
    }
}

fn arbitrary_operator() -> impl Strategy<Value = Operator> {
    prop::sample::select(Operator::ALL.to_vec())
}

fn entered(keys: &str) -> CalculatorSession {
    let mut session = CalculatorSession::new();
    for key in keys.chars() {
        session.input_digit(key);
    }
    session
}

proptest! {
    #[test]
    fn format_is_deterministic(
        num in prop::num::f64::ANY,
        mode in arbitrary_mode(),
        places in 0..20usize,
    ) {
        prop_assert_eq!(format_number(num, mode, places), format_number(num, mode, places));
    }

    #[test]
    fn normal_format_parses_back(num in -1e12f64..1e12f64) {
        let text = format_number(num, DisplayMode::Normal, 10);
        let parsed: f64 = text.parse().unwrap();
        prop_assert!((parsed - num).abs() <= 1e-9 * num.abs().max(1.0));
    }

    #[test]
    fn normal_fixed_format_has_no_trailing_zeros(num in -1e12f64..1e12f64) {
        let text = format_number(num, DisplayMode::Normal, 10);
        if !text.contains('e') && text.contains('.') {
            prop_assert!(!text.ends_with('0'));
            prop_assert!(!text.ends_with('.'));
        }
    }

    #[test]
    fn digit_entry_keeps_a_valid_literal(keys in "[0-9.]{0,20}") {
        let session = entered(&keys);
        let input = session.current_input();

        prop_assert!(input.matches('.').count() <= 1);
        prop_assert!(input.len() == 1 || !input.starts_with('0') || input.starts_with("0."));
        prop_assert!(input.parse::<f64>().is_ok());
    }

    #[test]
    fn toggle_sign_twice_is_identity(keys in "[0-9.]{0,12}") {
        let mut session = entered(&keys);
        let before = session.current_input().to_string();

        session.toggle_sign();
        session.toggle_sign();
        prop_assert_eq!(session.current_input(), before.as_str());
    }

    #[test]
    fn last_operator_wins(first in arbitrary_operator(), second in arbitrary_operator()) {
        let mut replaced = CalculatorSession::new();
        replaced.input_digit('5');
        replaced.input_operator(first);
        replaced.input_operator(second);
        replaced.input_digit('3');

        let mut direct = CalculatorSession::new();
        direct.input_digit('5');
        direct.input_operator(second);
        direct.input_digit('3');

        prop_assert_eq!(replaced.evaluate(), direct.evaluate());
    }

    #[test]
    fn history_never_exceeds_limit(evaluations in 0..60usize, limit in 1..30usize) {
        let mut session = SessionBuilder::new().history_limit(limit).build().unwrap();
        for i in 0..evaluations {
            session.input_constant(i as f64);
            session.evaluate().unwrap();
        }
        prop_assert_eq!(session.history().len(), evaluations.min(limit));
    }

    #[test]
    fn history_record_is_pure(count in 0..5usize) {
        let mut history = CalculationHistory::new();
        for i in 0..count {
            history = history.record(HistoryEntry::new(i.to_string(), i.to_string()));
        }

        let recorded = history.record(HistoryEntry::new("1 + 1", "2"));
        prop_assert_eq!(history.len(), count);
        prop_assert_eq!(recorded.len(), count + 1);
        let recorded_lines = recorded.lines();
        prop_assert_eq!(recorded_lines[0].as_str(), "1 + 1 = 2");
    }

    #[test]
    fn sin_then_asin_round_trips_in_degrees(angle in -80.0f64..80.0) {
        let mut session = SessionBuilder::new().angle_mode(AngleMode::Deg).build().unwrap();
        session.input_constant(angle);
        session.apply_trig(TrigFunction::Sin).unwrap();
        let back = session.apply_inverse_trig(InverseTrigFunction::Asin).unwrap();

        prop_assert!((back - angle).abs() < 1e-6);
    }

    #[test]
    fn state_name_is_stable(state in arbitrary_state()) {
        prop_assert_eq!(state.name(), state.name());
        prop_assert_eq!(state.is_error(), state == InputState::Error);
    }

    #[test]
    fn state_roundtrip_serialization(state in arbitrary_state()) {
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: InputState = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(state, deserialized);
    }
}
