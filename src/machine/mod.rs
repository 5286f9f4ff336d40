//! The keystroke-driven state machine.
//!
//! This module is the shell around the pure core: it turns `Key` events
//! into buffer edits, runs the evaluator for live previews and on `=`, and
//! exposes a `DisplayView` for rendering.
//!
//! # Key Concepts
//!
//! - **Modes**: `Entering`, `ResultShown` and `Error`, see `Mode`
//! - **Outcomes**: every key press reports a `KeyOutcome`
//! - **Views**: `Calculator::view` is the only state the screen needs

mod calculator;
mod key;
mod mode;
mod view;

pub use calculator::{Calculator, CalculatorState, KeyOutcome};
pub use key::{Key, KeyError};
pub use mode::Mode;
pub use view::DisplayView;
