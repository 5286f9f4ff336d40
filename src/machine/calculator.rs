//! The calculator state machine.
//!
//! All session state lives in one `CalculatorState` value and every key is
//! handled by a single transition on it. Evaluator failures never escape:
//! during typing they only suppress the live preview, on `=` they move the
//! machine into `Mode::Error`.

use super::key::{Key, KeyError};
use super::mode::Mode;
use super::view::DisplayView;
use crate::builder::CalculatorConfig;
use crate::core::{ExpressionBuffer, History, HistoryEntry, Operator, State, Token};
use crate::eval::{format_number, round_to, EvalError, Evaluator};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

/// What a key press did.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum KeyOutcome {
    /// State changed (buffer edited, mode changed, overlay toggled)
    Updated,

    /// The key does not apply in the current mode or was rejected by the
    /// buffer; nothing changed
    Ignored,

    /// `=` produced this (rounded) result
    Evaluated(f64),

    /// `=` failed; the machine is now in `Mode::Error`
    Failed(EvalError),
}

/// Complete state of one calculator session.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculatorState {
    buffer: ExpressionBuffer,
    live_value: Option<f64>,
    mode: Mode,
    error: Option<EvalError>,
    last_result: Option<f64>,
    history: History,
    history_open: bool,
}

impl CalculatorState {
    fn with_history(history: History) -> Self {
        Self {
            history,
            ..Self::default()
        }
    }

    pub fn buffer(&self) -> &ExpressionBuffer {
        &self.buffer
    }

    /// Last successful live-preview value while entering.
    pub fn live_value(&self) -> Option<f64> {
        self.live_value
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn error(&self) -> Option<EvalError> {
        self.error
    }

    pub fn last_result(&self) -> Option<f64> {
        self.last_result
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn is_history_open(&self) -> bool {
        self.history_open
    }
}

/// Keystroke-driven calculator.
///
/// # Example
///
/// ```rust
/// use tapcalc::machine::{Calculator, Key, KeyOutcome, Mode};
/// use tapcalc::core::Operator;
///
/// let mut calculator = Calculator::new();
/// calculator.press(Key::Digit(7));
/// calculator.press(Key::Operator(Operator::Add));
/// calculator.press(Key::Digit(3));
/// calculator.press(Key::Operator(Operator::Mul));
/// calculator.press(Key::Digit(2));
///
/// assert_eq!(calculator.press(Key::Equals), KeyOutcome::Evaluated(13.0));
/// assert_eq!(calculator.mode(), Mode::ResultShown);
/// assert_eq!(calculator.history().lines(), vec!["7+3×2 = 13"]);
/// ```
#[derive(Clone, Debug)]
pub struct Calculator {
    state: CalculatorState,
    config: CalculatorConfig,
    evaluator: Evaluator,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Create a calculator with the default configuration.
    pub fn new() -> Self {
        Self::with_config(CalculatorConfig::default())
    }

    /// Create a calculator from an already validated configuration.
    pub(crate) fn with_config(config: CalculatorConfig) -> Self {
        let history = match config.history_limit {
            Some(limit) => History::with_capacity_limit(limit),
            None => History::new(),
        };
        Self {
            state: CalculatorState::with_history(history),
            evaluator: Evaluator::with_overflow_limit(config.overflow_limit),
            config,
        }
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    pub fn mode(&self) -> Mode {
        self.state.mode
    }

    pub fn history(&self) -> &History {
        &self.state.history
    }

    pub fn last_result(&self) -> Option<f64> {
        self.state.last_result
    }

    /// Handle one key event.
    pub fn press(&mut self, key: Key) -> KeyOutcome {
        let from = self.state.mode;
        let outcome = match key {
            Key::Digit(_) => match key.digit_char() {
                Some(digit) => self.on_digit(digit),
                None => KeyOutcome::Ignored,
            },
            Key::DecimalPoint => self.on_decimal_point(),
            Key::Operator(op) => self.on_operator(op),
            Key::Paren => self.on_paren(),
            Key::Percent => self.on_percent(),
            Key::Backspace => self.on_backspace(),
            Key::Clear => {
                self.clear();
                KeyOutcome::Updated
            }
            Key::Equals => self.on_equals(),
            Key::OpenHistory => {
                self.state.history_open = true;
                KeyOutcome::Updated
            }
            Key::CloseHistory => {
                self.state.history_open = false;
                KeyOutcome::Updated
            }
            Key::SelectHistory(index) => self.select_history(index),
        };

        if outcome == KeyOutcome::Ignored {
            debug!(key = %key.symbol(), mode = from.name(), "key ignored");
        } else if from != self.state.mode {
            trace!(
                key = %key.symbol(),
                from = from.name(),
                to = self.state.mode.name(),
                "mode changed"
            );
        }
        outcome
    }

    /// Parse a keypad symbol and handle it.
    pub fn press_symbol(&mut self, symbol: &str) -> Result<KeyOutcome, KeyError> {
        let key = symbol.parse::<Key>()?;
        Ok(self.press(key))
    }

    /// Handle a sequence of keys, returning the outcome of the last one.
    pub fn press_all<I>(&mut self, keys: I) -> Option<KeyOutcome>
    where
        I: IntoIterator<Item = Key>,
    {
        keys.into_iter().map(|key| self.press(key)).last()
    }

    /// Seed the calculator from a `"<expression> = <result>"` history line.
    ///
    /// Lines without a parsable result are ignored.
    pub fn select_history_line(&mut self, line: &str) -> KeyOutcome {
        match HistoryEntry::parse_result(line) {
            Some(result) => {
                self.load_result(result);
                KeyOutcome::Updated
            }
            None => {
                debug!(line, "history line has no result");
                KeyOutcome::Ignored
            }
        }
    }

    /// Reset buffer, preview and mode. History is kept.
    pub fn clear(&mut self) {
        self.state.buffer.clear();
        self.state.live_value = None;
        self.state.mode = Mode::Entering;
        self.state.error = None;
        self.state.last_result = None;
    }

    /// Snapshot for rendering.
    pub fn view(&self) -> DisplayView {
        let display_text = match self.state.mode {
            Mode::Error => self
                .state
                .error
                .map_or("Error", |error| error.message())
                .to_string(),
            Mode::ResultShown => self
                .state
                .last_result
                .map(format_number)
                .unwrap_or_else(|| self.state.buffer.render()),
            Mode::Entering => self
                .state
                .live_value
                .map(format_number)
                .unwrap_or_else(|| self.state.buffer.render()),
        };

        DisplayView {
            expression_text: self.state.buffer.render(),
            display_text,
            is_error: self.state.mode.is_error(),
            mode: self.state.mode,
            history_open: self.state.history_open,
            history_entries: self.state.history.lines(),
        }
    }

    fn on_digit(&mut self, digit: char) -> KeyOutcome {
        if self.state.mode != Mode::Entering {
            self.restart();
        }
        self.state.buffer.push_digit(digit);
        self.refresh_preview();
        KeyOutcome::Updated
    }

    fn on_decimal_point(&mut self) -> KeyOutcome {
        if self.state.mode != Mode::Entering {
            self.restart();
        }
        self.state.buffer.append_decimal_point();
        self.refresh_preview();
        KeyOutcome::Updated
    }

    fn on_operator(&mut self, op: Operator) -> KeyOutcome {
        match self.state.mode {
            Mode::Entering => {
                if self.state.buffer.is_empty() {
                    self.state.buffer.push_digit('0');
                }
                if let Err(reason) = self.state.buffer.push_operator(op) {
                    debug!(%reason, operator = %op, "operator rejected");
                    return KeyOutcome::Ignored;
                }
                self.refresh_preview();
                KeyOutcome::Updated
            }
            Mode::ResultShown => {
                let Some(result) = self.state.last_result else {
                    return KeyOutcome::Ignored;
                };
                self.restart();
                self.state.buffer = ExpressionBuffer::seeded(format_number(result));
                if self.state.buffer.push_operator(op).is_err() {
                    return KeyOutcome::Ignored;
                }
                self.state.live_value = Some(result);
                KeyOutcome::Updated
            }
            Mode::Error => KeyOutcome::Ignored,
        }
    }

    fn on_paren(&mut self) -> KeyOutcome {
        match self.state.mode {
            Mode::Entering => {}
            // A fresh parenthesised expression replaces the shown result.
            Mode::ResultShown => self.restart(),
            Mode::Error => return KeyOutcome::Ignored,
        }
        self.state.buffer.open_or_close_paren(self.config.paren_mode);
        self.refresh_preview();
        KeyOutcome::Updated
    }

    fn on_percent(&mut self) -> KeyOutcome {
        if self.state.mode != Mode::Entering {
            return KeyOutcome::Ignored;
        }
        if let Err(reason) = self.state.buffer.append(Token::Percent) {
            debug!(%reason, "percent rejected");
            return KeyOutcome::Ignored;
        }
        self.refresh_preview();
        KeyOutcome::Updated
    }

    fn on_backspace(&mut self) -> KeyOutcome {
        match self.state.mode {
            Mode::Entering => {
                self.state.buffer.backspace();
                self.refresh_preview();
                KeyOutcome::Updated
            }
            Mode::ResultShown => KeyOutcome::Ignored,
            Mode::Error => {
                self.restart();
                KeyOutcome::Updated
            }
        }
    }

    fn on_equals(&mut self) -> KeyOutcome {
        match self.state.mode {
            Mode::Entering if self.state.buffer.is_empty() => KeyOutcome::Ignored,
            Mode::Entering => self.finish(true),
            // Re-pressing `=` shows the same result without a second entry.
            Mode::ResultShown => self.finish(false),
            Mode::Error => KeyOutcome::Ignored,
        }
    }

    fn finish(&mut self, record: bool) -> KeyOutcome {
        match self.evaluator.evaluate(self.state.buffer.tokens()) {
            Ok(raw) => {
                let result = round_to(raw, self.config.decimal_places);
                if record {
                    let entry = HistoryEntry {
                        expression: self.state.buffer.render(),
                        result,
                        recorded_at: Utc::now(),
                    };
                    info!(line = %entry.line(), "computation recorded");
                    self.state.history = self.state.history.record(entry);
                }
                self.state.mode = Mode::ResultShown;
                self.state.last_result = Some(result);
                self.state.live_value = Some(result);
                self.state.error = None;
                KeyOutcome::Evaluated(result)
            }
            Err(error) => {
                debug!(
                    %error,
                    expression = %self.state.buffer.render(),
                    "evaluation failed"
                );
                self.state.mode = Mode::Error;
                self.state.error = Some(error);
                self.state.live_value = None;
                KeyOutcome::Failed(error)
            }
        }
    }

    fn select_history(&mut self, index: usize) -> KeyOutcome {
        let Some(result) = self.state.history.get(index).map(|entry| entry.result) else {
            debug!(index, len = self.state.history.len(), "no such history entry");
            return KeyOutcome::Ignored;
        };
        self.load_result(result);
        KeyOutcome::Updated
    }

    fn load_result(&mut self, result: f64) {
        self.state.buffer = ExpressionBuffer::seeded(format_number(result));
        self.state.mode = Mode::ResultShown;
        self.state.last_result = Some(result);
        self.state.live_value = Some(result);
        self.state.error = None;
        self.state.history_open = false;
    }

    /// Start a new buffer in `Entering`, keeping history.
    fn restart(&mut self) {
        self.state.buffer.clear();
        self.state.live_value = None;
        self.state.error = None;
        self.state.mode = Mode::Entering;
    }

    fn refresh_preview(&mut self) {
        if self.state.buffer.is_empty() {
            self.state.live_value = None;
            return;
        }
        match self.evaluator.evaluate(self.state.buffer.tokens()) {
            Ok(raw) => {
                let value = round_to(raw, self.config.decimal_places);
                trace!(value, "live preview");
                self.state.live_value = Some(value);
            }
            Err(error) => trace!(%error, "live preview unavailable"),
        }
    }
}
