//! Tools Tour
//!
//! This example walks through the calculator's side panels.
//!
//! Key concepts:
//! - Descriptive statistics over comma-separated data
//! - Linear and quadratic equation solving
//! - Base and angle conversion
//! - Features that report "not implemented"
//!
//! Run with: cargo run --example tools_tour

use scicalc::core::AngleMode;
use scicalc::format::{DisplayMode, NumberFormat};
use scicalc::tools::{
    describe_angle_conversion, describe_base_conversion, CalculusOperation, ComplexFunction,
    EquationKind, MatrixOperation, StatOperation,
};

fn main() {
    println!("=== Tools Tour ===\n");

    let format = NumberFormat::new(DisplayMode::Normal, 6);
    let data = "2, 4, 4, 4, 5, 5, 7, 9, oops";

    println!("Statistics over [{data}]:");
    for op in StatOperation::ALL {
        match op.report(data, &format) {
            Ok(report) => println!("  {report}"),
            Err(err) => println!("  {}: {err}", op.name()),
        }
    }

    println!("\nEquations:");
    let equations: [(EquationKind, &[&str]); 4] = [
        (EquationKind::Linear, &["2", "-8"]),
        (EquationKind::Quadratic, &["1", "-3", "2"]),
        (EquationKind::Quadratic, &["1", "2", "1"]),
        (EquationKind::Quadratic, &["1", "0", "1"]),
    ];
    for (kind, coefficients) in equations {
        let solution = kind.solve(coefficients).render(&format);
        println!("  {kind:?} {coefficients:?}: {}", solution.replace('\n', ", "));
    }

    println!("\nConversions:");
    for (input, from, to) in [("255", 10, 16), ("1010", 2, 10), ("zz", 36, 8)] {
        match describe_base_conversion(input, from, to) {
            Ok(text) => println!("  {text}"),
            Err(err) => println!("  {err}"),
        }
    }
    println!(
        "  {}",
        describe_angle_conversion(90.0, AngleMode::Deg, AngleMode::Grad, &format)
    );

    println!("\nNot implemented:");
    for err in [
        MatrixOperation::Inverse.perform(),
        CalculusOperation::Integral.perform(),
        ComplexFunction::Arg.perform(),
    ]
    .into_iter()
    .filter_map(Result::err)
    {
        println!("  {err}");
    }

    println!("\n=== Example Complete ===");
}
