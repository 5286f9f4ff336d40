//! Keypad Session
//!
//! This example drives a calculator from keypad symbols and prints the
//! display after every key.
//!
//! Key concepts:
//! - Keys parsed from keypad symbols, ASCII aliases shown as keypad glyphs
//! - Live preview while typing, result or error message on `=`
//! - History lines in `"<expression> = <result>"` form
//! - Structured logs via `RUST_LOG=tapcalc=debug`
//!
//! Run with: cargo run --example keypad_session -- 7 + 3 × 2 =

use std::error::Error;

use tapcalc::{Calculator, Key, KeyOutcome};
use tracing_subscriber::EnvFilter;

const DEFAULT_SESSION: &[&str] = &[
    "7", "+", "3", "×", "2", "=", "C", "8", "÷", "0", "=", "⌫", "5", "0", "%", "=",
];

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Keypad Session ===\n");

    let args: Vec<String> = std::env::args().skip(1).collect();
    let symbols: Vec<&str> = if args.is_empty() {
        DEFAULT_SESSION.to_vec()
    } else {
        args.iter().map(String::as_str).collect()
    };

    let mut calculator = Calculator::new();
    for symbol in symbols {
        let key: Key = symbol.parse()?;
        let outcome = calculator.press(key);
        let view = calculator.view();
        let note = match outcome {
            KeyOutcome::Updated => String::new(),
            KeyOutcome::Ignored => "  (ignored)".to_string(),
            KeyOutcome::Evaluated(value) => format!("  => {value}"),
            KeyOutcome::Failed(error) => format!("  !! {error}"),
        };
        println!(
            "{:>3} | {:<20} | {:<18}{note}",
            key.symbol(),
            view.expression_text,
            view.display_text
        );
    }

    println!("\nHistory:");
    for line in calculator.history().lines() {
        println!("  {line}");
    }
    if let Some(latest) = calculator.history().last() {
        println!("Latest recorded at {}", latest.recorded_at.to_rfc3339());
    }

    println!("\nFinal view as JSON:");
    println!("{}", calculator.view().to_json()?);

    println!("\n=== Example Complete ===");
    Ok(())
}
