//! Buffer editing errors.

use thiserror::Error;

/// Reasons a token cannot be appended to the expression buffer.
///
/// These are rejections, not failures: the state machine ignores the key
/// and leaves the buffer untouched.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum BufferError {
    #[error("an expression cannot start with an operator")]
    LeadingOperator,

    #[error("an operator cannot follow another operator")]
    ConsecutiveOperator,

    #[error("an operator cannot follow an opening parenthesis")]
    OperatorAfterParen,

    #[error("percent must follow a number or a closing parenthesis")]
    DanglingPercent,

    #[error("number text must be digits with at most one decimal point")]
    MalformedNumber,
}
