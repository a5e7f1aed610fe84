//! Keypad Session
//!
//! This example drives a calculator session the way a keypad front end
//! would: decode keys and button names into actions, dispatch them, and
//! render the display after each step.
//!
//! Key concepts:
//! - Operator replacement (last operator wins)
//! - Error sentinel followed by a clear
//! - Angle modes for trigonometric functions
//! - History and memory registers
//!
//! Run with: cargo run --example keypad_session

use scicalc::builder::SessionBuilder;
use scicalc::core::{AngleMode, State};
use scicalc::dispatch::{dispatch, Action, StepResult};
use scicalc::session::CalculatorSession;
use scicalc::snapshot::SessionSnapshot;

fn press(session: &mut CalculatorSession, names: &[&str]) {
    for name in names {
        let action: Action = name.parse().unwrap();
        let step = dispatch(session, action);
        let note = match &step {
            StepResult::Transitioned { from, to } => {
                format!("{} -> {}", from.name(), to.name())
            }
            StepResult::Failed { error, .. } => format!("failed: {error}"),
            StepResult::Rejected { reason } => format!("rejected: {reason}"),
            StepResult::Unsupported { message } => message.clone(),
        };
        println!("  {:>10}  {:<18} {}", name, session.display_text(), note);
    }
}

fn main() {
    println!("=== Keypad Session ===\n");

    let mut session = SessionBuilder::new()
        .angle_mode(AngleMode::Deg)
        .decimal_places(8)
        .build()
        .unwrap();

    println!("Operator replacement:");
    press(&mut session, &["5", "+", "-", "3", "equals"]);

    println!("\nChaining from the last result:");
    press(&mut session, &["*", "(", "4", "+", "1", ")", "="]);

    println!("\nDivision by zero flashes Error, then clears:");
    press(&mut session, &["1", "/", "0", "=", "Escape"]);

    println!("\nTrigonometry in degrees:");
    press(&mut session, &["3", "0", "sin", "asin"]);

    println!("\nSwitching to radians:");
    press(&mut session, &["clear", "rad", "pi", "cos"]);

    println!("\nMemory:");
    press(&mut session, &["clear", "1", "2", "ms", "clear", "5", "mplus", "mr"]);

    println!("\nHistory (most recent first):");
    for line in session.history().lines() {
        println!("  {line}");
    }

    println!("\nSnapshot for a remote display:");
    let snapshot = SessionSnapshot::capture(&session);
    println!("{}", snapshot.to_json().unwrap());

    println!("\n=== Example Complete ===");
}
