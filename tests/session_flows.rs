//! End-to-end flows through the public API: settings, builder, dispatch
//! and snapshots working together.

use scicalc::core::{AngleMode, InputState};
use scicalc::dispatch::{dispatch, Action, StepResult};
use scicalc::format::DisplayMode;
use scicalc::session::{CalcError, CalculatorSession, ERROR_SENTINEL};
use scicalc::settings::{Settings, SettingsError};
use scicalc::snapshot::SessionSnapshot;
use scicalc::tools::{describe_angle_conversion, StatOperation};
use scicalc::{BuildError, SessionBuilder};
use std::io::Write;

fn run(session: &mut CalculatorSession, names: &[&str]) -> Vec<StepResult> {
    names
        .iter()
        .map(|name| dispatch(session, name.parse::<Action>().unwrap()))
        .collect()
}

#[test]
fn settings_file_configures_the_session() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "angle_mode = \"rad\"").unwrap();
    writeln!(file, "display_mode = \"scientific\"").unwrap();
    writeln!(file, "decimal_places = 3").unwrap();

    let settings = Settings::load(file.path()).unwrap();
    let mut session = SessionBuilder::new().settings(settings).build().unwrap();

    run(&mut session, &["1", "2", "3", "4", "equals"]);
    assert_eq!(session.current_input(), "1.234e+3");
    assert_eq!(session.angle_mode(), AngleMode::Rad);
}

#[test]
fn invalid_settings_file_is_reported_with_every_violation() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "decimal_places = 250").unwrap();
    writeln!(file, "history_limit = 0").unwrap();

    match Settings::load(file.path()) {
        Err(SettingsError::Invalid(violations)) => assert_eq!(violations.len(), 2),
        other => panic!("Expected invalid settings, got {other:?}"),
    }

    let result = SessionBuilder::new().history_limit(0).build();
    assert!(matches!(result, Err(BuildError::InvalidSettings(_))));
}

#[test]
fn error_flash_then_clear_recovers() {
    let mut session = CalculatorSession::new();
    let steps = run(&mut session, &["(", "2", "+", "3", "equals"]);

    assert!(matches!(
        steps.last(),
        Some(StepResult::Failed {
            error: CalcError::Evaluation(_),
            state: InputState::Error
        })
    ));
    assert_eq!(session.display_text(), ERROR_SENTINEL);

    run(&mut session, &["Escape", "7", "*", "6", "="]);
    assert_eq!(session.current_input(), "42");
    assert_eq!(session.history().lines(), vec!["7 * 6 = 42"]);
}

#[test]
fn grad_mode_functions_and_display_modes() {
    let mut session = CalculatorSession::new();
    run(&mut session, &["grad", "1", "0", "0", "sin"]);
    assert_eq!(session.current_input(), "1");

    run(&mut session, &["clear", "engineering", "decimals:1", "1", "2", "5", "0", "0", "="]);
    assert_eq!(session.display_mode(), DisplayMode::Engineering);
    assert_eq!(session.current_input(), "12.5e3");
}

#[test]
fn long_session_keeps_twenty_entries() {
    let mut session = CalculatorSession::new();
    for i in 1..=25 {
        for digit in i.to_string().chars() {
            session.input_digit(digit);
        }
        dispatch(&mut session, Action::Evaluate);
    }

    let lines = session.history().lines();
    assert_eq!(lines.len(), 20);
    assert_eq!(lines.first().map(String::as_str), Some("25 = 25"));
    assert_eq!(lines.last().map(String::as_str), Some("6 = 6"));
}

#[test]
fn snapshot_tracks_the_session_over_json_and_binary() {
    let mut session = CalculatorSession::new();
    run(&mut session, &["3", "factorial", "ms", "+", "4"]);

    let snapshot = SessionSnapshot::capture(&session);
    assert_eq!(snapshot.display, "6 + 4");
    assert_eq!(snapshot.memory, 6.0);
    assert_eq!(snapshot.state, InputState::EnteringNumber);

    let from_json = SessionSnapshot::from_json(&snapshot.to_json().unwrap()).unwrap();
    let from_binary = SessionSnapshot::from_binary(&snapshot.to_binary().unwrap()).unwrap();
    assert_eq!(from_json, snapshot);
    assert_eq!(from_binary, snapshot);
}

#[test]
fn tools_share_the_session_format() {
    let session = SessionBuilder::new().decimal_places(2).build().unwrap();
    let format = session.number_format();

    assert_eq!(
        StatOperation::StdDev
            .report("2, 4, 4, 4, 5, 5, 7, 9", &format)
            .unwrap(),
        "STDDEV: 2"
    );
    assert_eq!(
        describe_angle_conversion(1.0, AngleMode::Rad, AngleMode::Deg, &format),
        "1 rad = 57.3 deg"
    );
}
