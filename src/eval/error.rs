//! Evaluation error types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when evaluating an expression.
///
/// The `Display` form of each variant is the message the calculator screen
/// shows when `=` fails.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EvalError {
    /// A finite value was divided by zero
    #[error("Division by zero")]
    DivisionByZero,

    /// Incomplete or invalid syntax: trailing operator, empty or unbalanced
    /// parentheses, unparsable number
    #[error("Invalid Input")]
    MalformedExpression,

    /// A value left the representable range
    #[error("Invalid Operation")]
    Overflow,
}

impl EvalError {
    /// Message rendered in place of the display value.
    pub fn message(&self) -> &'static str {
        match self {
            Self::DivisionByZero => "Division by zero",
            Self::MalformedExpression => "Invalid Input",
            Self::Overflow => "Invalid Operation",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_display() {
        for error in [
            EvalError::DivisionByZero,
            EvalError::MalformedExpression,
            EvalError::Overflow,
        ] {
            assert_eq!(error.to_string(), error.message());
        }
    }

    #[test]
    fn each_error_has_a_distinct_message() {
        assert_ne!(
            EvalError::MalformedExpression.message(),
            EvalError::Overflow.message()
        );
        assert_eq!(EvalError::DivisionByZero.message(), "Division by zero");
    }
}
