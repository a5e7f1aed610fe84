//! Line-oriented front end for the calculator.
//!
//! Each stdin line is a whitespace-separated list of keys or button names
//! (`12 + 3 =`, `9 sqrt`, `pi sin`). Tokens that are not actions are fed
//! character by character, so `12+3=` also works. Lines starting with `:`
//! run a tool:
//!
//! ```text
//! :stats mean 1, 2, 3, 4
//! :solve quadratic 1 -3 2
//! :base ff 16 2
//! :angle 180 deg rad
//! :matrix determinant
//! ```
//!
//! Logging goes to stderr and is controlled with `RUST_LOG`.

use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;
use scicalc::builder::SessionBuilder;
use scicalc::core::AngleMode;
use scicalc::dispatch::{dispatch, Action, StepResult};
use scicalc::format::{DisplayMode, NumberFormat};
use scicalc::session::CalculatorSession;
use scicalc::settings::Settings;
use scicalc::snapshot::SessionSnapshot;
use scicalc::tools::{
    describe_angle_conversion, describe_base_conversion, CalculusOperation, EquationKind,
    MatrixOperation, StatOperation,
};
use std::io::{self, BufRead};
use std::path::PathBuf;
use tracing::{debug, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "scicalc")]
#[command(about = "Keypad-driven scientific calculator")]
struct Args {
    /// Settings file (TOML). Defaults to <config dir>/scicalc/settings.toml
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Angle unit: deg, rad or grad
    #[arg(long, short = 'a')]
    angle: Option<AngleMode>,

    /// Display mode: normal, scientific or engineering
    #[arg(long, short = 'd')]
    display: Option<DisplayMode>,

    /// Fractional digits shown
    #[arg(long)]
    decimals: Option<usize>,

    /// Print a JSON snapshot after each line instead of the display text
    #[arg(long)]
    json: bool,

    /// Run these tokens as one line and exit instead of reading stdin
    tokens: Vec<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = Args::parse();
    let settings = load_settings(&args)?;
    debug!(?settings, "Starting session");

    let mut session = SessionBuilder::new().settings(settings).build()?;

    if !args.tokens.is_empty() {
        let line = args.tokens.join(" ");
        return run_line(&mut session, &line, args.json);
    }

    for line in io::stdin().lock().lines() {
        let line = line.context("Failed to read stdin")?;
        run_line(&mut session, &line, args.json)?;
    }
    Ok(())
}

fn load_settings(args: &Args) -> Result<Settings> {
    let mut settings = match &args.config {
        Some(path) => Settings::load(path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        None => Settings::load_default()?,
    };

    if let Some(angle) = args.angle {
        settings.angle_mode = angle;
    }
    if let Some(display) = args.display {
        settings.display_mode = display;
    }
    if let Some(decimals) = args.decimals {
        settings.decimal_places = decimals;
    }
    Ok(settings)
}

fn run_line(session: &mut CalculatorSession, line: &str, json: bool) -> Result<()> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(());
    }

    if let Some(command) = line.strip_prefix(':') {
        match run_tool(command, &session.number_format()) {
            Ok(output) => println!("{output}"),
            Err(err) => println!("{err}"),
        }
        return Ok(());
    }

    for token in line.split_whitespace() {
        for action in decode(token) {
            apply(session, action);
        }
    }

    if json {
        println!("{}", SessionSnapshot::capture(session).to_json()?);
    } else {
        println!("{}", session.display_text());
    }
    Ok(())
}

/// A button name or key, else the token's characters as keys.
fn decode(token: &str) -> Vec<Action> {
    if let Ok(action) = token.parse::<Action>() {
        return vec![action];
    }

    let keys: Option<Vec<Action>> = token
        .chars()
        .map(|c| Action::from_key(c.encode_utf8(&mut [0; 4])))
        .collect();
    keys.unwrap_or_else(|| {
        warn!(token, "Skipping unknown token");
        Vec::new()
    })
}

fn apply(session: &mut CalculatorSession, action: Action) {
    match dispatch(session, action) {
        StepResult::Transitioned { .. } => {}
        StepResult::Failed { error, .. } => {
            // Flash the sentinel, then clear like the keypad does.
            println!("{}: {error}", session.display_text());
            session.clear();
        }
        StepResult::Rejected { reason } => println!("{reason}"),
        StepResult::Unsupported { message } => println!("{message}"),
    }
}

fn run_tool(command: &str, format: &NumberFormat) -> Result<String> {
    let mut parts = command.split_whitespace();
    let tool = parts.next().ok_or_else(|| anyhow!("Missing tool name"))?;
    let name = parts.next().unwrap_or_default();
    let rest: Vec<&str> = parts.collect();

    match tool {
        "stats" => {
            let op = StatOperation::from_name(name)
                .ok_or_else(|| anyhow!("Unknown statistic '{name}'"))?;
            Ok(op.report(&rest.join(" "), format)?)
        }
        "solve" => {
            let kind = EquationKind::from_name(name)
                .ok_or_else(|| anyhow!("Unknown equation type '{name}'"))?;
            Ok(kind.solve(&rest).render(format))
        }
        "base" => {
            let [from, to] = rest[..] else {
                bail!("Usage: :base <number> <from> <to>");
            };
            Ok(describe_base_conversion(name, from.parse()?, to.parse()?)?)
        }
        "angle" => {
            let [from, to] = rest[..] else {
                bail!("Usage: :angle <value> <from> <to>");
            };
            let value: f64 = name.parse()?;
            Ok(describe_angle_conversion(
                value,
                from.parse()?,
                to.parse()?,
                format,
            ))
        }
        "matrix" => {
            let op = MatrixOperation::from_name(name)
                .ok_or_else(|| anyhow!("Unknown matrix operation '{name}'"))?;
            Ok(op.perform()?)
        }
        "calculus" => {
            let op = CalculusOperation::from_name(name)
                .ok_or_else(|| anyhow!("Unknown calculus operation '{name}'"))?;
            Ok(op.perform()?)
        }
        other => bail!("Unknown tool '{other}'"),
    }
}
