//! Tapcalc: the input state machine and expression evaluator of a keypad
//! calculator.
//!
//! Tapcalc follows a "pure core, imperative shell" layout. The core holds
//! plain data (tokens, the expression buffer, history) and a pure
//! evaluator; the state machine is the only place state changes, one key at
//! a time.
//!
//! # Core Concepts
//!
//! - **Buffer**: the tokens typed so far, rendered with keypad glyphs
//! - **Evaluator**: a precedence-climbing parser, never a code executor
//! - **Calculator**: consumes `Key` events and exposes a `DisplayView`
//! - **History**: append-only log of completed computations
//!
//! # Example
//!
//! ```rust
//! use tapcalc::{Calculator, Key, KeyOutcome};
//!
//! let mut calculator = Calculator::new();
//! for symbol in ["8", "÷", "0"] {
//!     calculator.press_symbol(symbol).unwrap();
//! }
//!
//! assert!(matches!(calculator.press(Key::Equals), KeyOutcome::Failed(_)));
//!
//! let view = calculator.view();
//! assert!(view.is_error);
//! assert_eq!(view.display_text, "Division by zero");
//! assert!(view.history_entries.is_empty());
//! ```

pub mod builder;
pub mod core;
pub mod eval;
pub mod machine;

// Re-export commonly used types
pub use self::builder::{BuildError, CalculatorBuilder, CalculatorConfig};
pub use self::core::{ExpressionBuffer, History, HistoryEntry, Operator, State, Token};
pub use self::eval::{evaluate, EvalError};
pub use self::machine::{Calculator, DisplayView, Key, KeyOutcome, Mode};
