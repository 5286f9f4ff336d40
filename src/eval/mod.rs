//! Safe arithmetic evaluation.
//!
//! Expressions are evaluated by an explicit precedence-climbing parser over
//! the buffer's tokens. Nothing is ever executed as code, and every failure
//! is classified as one of three `EvalError` kinds.

mod error;
mod number;
mod parser;

pub use error::EvalError;
pub use number::{format_number, round_to, DEFAULT_DECIMAL_PLACES, MAX_DECIMAL_PLACES};
pub use parser::{evaluate, Evaluator, MAX_NESTING};
