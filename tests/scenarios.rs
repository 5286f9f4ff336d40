//! End-to-end keypad scenarios driven through button symbols.

use tapcalc::core::ParenMode;
use tapcalc::{
    Calculator, CalculatorBuilder, DisplayView, EvalError, Key, KeyOutcome, Mode,
};

fn press(calculator: &mut Calculator, symbols: &[&str]) -> Vec<KeyOutcome> {
    symbols
        .iter()
        .map(|symbol| calculator.press_symbol(symbol).unwrap())
        .collect()
}

#[test]
fn precedence_scenario() {
    let mut calculator = Calculator::new();
    let outcomes = press(&mut calculator, &["7", "+", "3", "×", "2", "="]);

    assert_eq!(outcomes.last(), Some(&KeyOutcome::Evaluated(13.0)));
    assert_eq!(calculator.mode(), Mode::ResultShown);
    assert_eq!(calculator.history().lines(), vec!["7+3×2 = 13"]);

    let view = calculator.view();
    assert_eq!(view.display_text, "13");
    assert_eq!(view.expression_text, "7+3×2");
}

#[test]
fn division_by_zero_scenario() {
    let mut calculator = Calculator::new();
    let outcomes = press(&mut calculator, &["8", "÷", "0", "="]);

    assert_eq!(
        outcomes.last(),
        Some(&KeyOutcome::Failed(EvalError::DivisionByZero))
    );
    assert_eq!(calculator.mode(), Mode::Error);
    assert_eq!(calculator.view().display_text, "Division by zero");
    assert!(calculator.history().is_empty());
}

#[test]
fn percent_scenario() {
    let mut calculator = Calculator::new();
    let outcomes = press(&mut calculator, &["5", "0", "%", "="]);
    assert_eq!(outcomes.last(), Some(&KeyOutcome::Evaluated(0.5)));
    assert_eq!(calculator.history().lines(), vec!["50% = 0.5"]);
}

#[test]
fn history_round_trip_scenario() {
    let mut calculator = Calculator::new();
    press(&mut calculator, &["3", "+", "4", "=", "C", "9", "×"]);

    press(&mut calculator, &["H"]);
    let line = calculator.view().history_entries[0].clone();
    assert_eq!(line, "3+4 = 7");

    assert_eq!(calculator.select_history_line(&line), KeyOutcome::Updated);
    assert_eq!(calculator.press(Key::Equals), KeyOutcome::Evaluated(7.0));
    assert_eq!(calculator.history().len(), 1);
}

#[test]
fn backspace_on_cleared_buffer_keeps_zero() {
    let mut calculator = Calculator::new();
    press(&mut calculator, &["1", "2", "C", "⌫", "⌫"]);

    let view = calculator.view();
    assert_eq!(view.display_text, "0");
    assert_eq!(view.expression_text, "0");
    assert_eq!(calculator.mode(), Mode::Entering);
}

#[test]
fn parenthesised_expression() {
    let mut calculator = Calculator::new();
    let outcomes = press(&mut calculator, &["()", "7", "+", "3", "()", "×", "2", "="]);

    assert_eq!(outcomes.last(), Some(&KeyOutcome::Evaluated(20.0)));
    assert_eq!(calculator.history().lines(), vec!["(7+3)×2 = 20"]);
}

#[test]
fn unbalanced_parenthesis_fails_only_on_equals() {
    let mut calculator = Calculator::new();
    press(&mut calculator, &["()", "2", "+", "1"]);
    assert_eq!(calculator.mode(), Mode::Entering);
    assert!(!calculator.view().is_error);

    assert_eq!(
        calculator.press(Key::Equals),
        KeyOutcome::Failed(EvalError::MalformedExpression)
    );
    assert_eq!(calculator.view().display_text, "Invalid Input");
}

#[test]
fn nested_parentheses_in_balanced_mode() {
    let mut calculator = CalculatorBuilder::new()
        .paren_mode(ParenMode::Balanced)
        .build()
        .unwrap();
    let outcomes = press(
        &mut calculator,
        &["2", "×", "()", "()", "1", "+", "2", "()", "×", "3", "()", "="],
    );

    assert_eq!(outcomes.last(), Some(&KeyOutcome::Evaluated(18.0)));
    assert_eq!(calculator.history().lines(), vec!["2×((1+2)×3) = 18"]);
}

#[test]
fn runaway_nesting_still_renders() {
    let mut calculator = CalculatorBuilder::new()
        .paren_mode(ParenMode::Balanced)
        .build()
        .unwrap();
    for _ in 0..10_000 {
        calculator.press(Key::Paren);
    }
    assert_eq!(calculator.press(Key::Digit(1)), KeyOutcome::Updated);

    let view = calculator.view();
    assert_eq!(view.mode, Mode::Entering);
    assert!(!view.is_error);
    assert_eq!(view.expression_text.len(), 10_001);

    assert_eq!(
        calculator.press(Key::Equals),
        KeyOutcome::Failed(EvalError::MalformedExpression)
    );
    assert_eq!(calculator.view().display_text, "Invalid Input");
}

#[test]
fn overflow_is_reported_distinctly() {
    let mut calculator = CalculatorBuilder::new()
        .overflow_limit(1_000_000.0)
        .build()
        .unwrap();
    press(&mut calculator, &["9", "9", "9", "9", "×", "9", "9", "9", "9"]);

    assert_eq!(
        calculator.press(Key::Equals),
        KeyOutcome::Failed(EvalError::Overflow)
    );
    assert_eq!(calculator.view().display_text, "Invalid Operation");
}

#[test]
fn decimal_results_are_rounded() {
    let mut calculator = Calculator::new();
    let outcomes = press(&mut calculator, &["0", ".", "1", "+", "0", ".", "2", "="]);
    assert_eq!(outcomes.last(), Some(&KeyOutcome::Evaluated(0.3)));
    assert_eq!(calculator.history().lines(), vec!["0.1+0.2 = 0.3"]);
}

#[test]
fn view_serializes_to_json() {
    let mut calculator = Calculator::new();
    press(&mut calculator, &["6", "÷", "4", "="]);

    let json = calculator.view().to_json().unwrap();
    let view: DisplayView = serde_json::from_str(&json).unwrap();
    assert_eq!(view.display_text, "1.5");
    assert_eq!(view.history_entries, vec!["6÷4 = 1.5"]);
}

#[test]
fn unknown_symbol_is_an_error() {
    let mut calculator = Calculator::new();
    assert!(calculator.press_symbol("sqrt").is_err());
    assert_eq!(calculator.view().display_text, "0");
}

#[test]
fn logging_does_not_disturb_transitions() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("tapcalc=trace"))
        .with_test_writer()
        .try_init();

    let mut calculator = Calculator::new();
    let outcomes = press(&mut calculator, &["4", "+", "+", "2", "=", "⌫"]);
    assert_eq!(
        outcomes,
        vec![
            KeyOutcome::Updated,
            KeyOutcome::Updated,
            KeyOutcome::Ignored,
            KeyOutcome::Updated,
            KeyOutcome::Evaluated(6.0),
            KeyOutcome::Ignored,
        ]
    );
}
