//! The expression buffer: tokens typed so far and their rendering.
//!
//! The buffer knows nothing about evaluation. It enforces the structural
//! rules of entry (no leading or doubled operators) and renders itself with
//! the same glyphs the keypad shows.

use super::error::BufferError;
use super::token::{Operator, Token};
use serde::{Deserialize, Serialize};

/// Text shown for an empty buffer.
pub const EMPTY_RENDER: &str = "0";

/// How the combined `()` key decides between opening and closing.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum ParenMode {
    /// Close when some `(` has no `)` after it, otherwise open.
    ///
    /// Nesting is not tracked: `((` followed by the key yields `(()`.
    #[default]
    Toggle,

    /// Close when an operand has just ended and a `(` is still unmatched,
    /// otherwise open. Supports nesting.
    Balanced,
}

/// Ordered token sequence under construction.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ExpressionBuffer {
    tokens: Vec<Token>,
}

impl ExpressionBuffer {
    /// Create an empty buffer (renders as `"0"`).
    pub fn new() -> Self {
        Self { tokens: Vec::new() }
    }

    /// Create a buffer holding a single number literal.
    ///
    /// ```rust
    /// use tapcalc::core::ExpressionBuffer;
    ///
    /// let buffer = ExpressionBuffer::seeded("-2.5");
    /// assert_eq!(buffer.render(), "-2.5");
    /// ```
    pub fn seeded(text: impl Into<String>) -> Self {
        Self {
            tokens: vec![Token::Number(text.into())],
        }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn last(&self) -> Option<&Token> {
        self.tokens.last()
    }

    pub fn ends_with_operator(&self) -> bool {
        self.tokens.last().is_some_and(Token::is_operator)
    }

    /// Append a token, enforcing the entry rules.
    ///
    /// A `Number` token appended after an open number is concatenated onto
    /// it rather than pushed; a lone `"0"` is replaced instead of extended so
    /// the buffer never shows `"05"`. Number text must be digits with at most
    /// one `.` overall; a leading `-` is only accepted on a new number.
    ///
    /// ```rust
    /// use tapcalc::core::{BufferError, ExpressionBuffer, Operator, Token};
    ///
    /// let mut buffer = ExpressionBuffer::new();
    /// buffer.append(Token::Number("7".into())).unwrap();
    /// buffer.append(Token::Operator(Operator::Add)).unwrap();
    ///
    /// let doubled = buffer.append(Token::Operator(Operator::Mul));
    /// assert_eq!(doubled, Err(BufferError::ConsecutiveOperator));
    /// assert_eq!(buffer.render(), "7+");
    /// ```
    pub fn append(&mut self, token: Token) -> Result<(), BufferError> {
        match &token {
            Token::Operator(_) => match self.tokens.last() {
                None => return Err(BufferError::LeadingOperator),
                Some(Token::Operator(_)) => return Err(BufferError::ConsecutiveOperator),
                Some(Token::LeftParen) => return Err(BufferError::OperatorAfterParen),
                Some(_) => {}
            },
            Token::Percent => {
                if !matches!(
                    self.tokens.last(),
                    Some(Token::Number(_)) | Some(Token::RightParen)
                ) {
                    return Err(BufferError::DanglingPercent);
                }
            }
            Token::Number(digits) => {
                let open = match self.tokens.last() {
                    Some(Token::Number(open)) => Some(open.as_str()),
                    _ => None,
                };
                if !is_number_text(digits, open) {
                    return Err(BufferError::MalformedNumber);
                }
                if let Some(Token::Number(open)) = self.tokens.last_mut() {
                    if open == "0" && !digits.starts_with('.') {
                        open.clone_from(digits);
                    } else {
                        open.push_str(digits);
                    }
                    return Ok(());
                }
            }
            Token::LeftParen | Token::RightParen => {}
        }

        self.tokens.push(token);
        Ok(())
    }

    /// Append one digit character to the open number, or open a new one.
    pub fn push_digit(&mut self, digit: char) {
        // Anything but an ASCII digit is rejected by `append`.
        let _ = self.append(Token::Number(digit.to_string()));
    }

    /// Append an operator unless the entry rules reject it.
    pub fn push_operator(&mut self, op: Operator) -> Result<(), BufferError> {
        self.append(Token::Operator(op))
    }

    /// Append `.` to the open number.
    ///
    /// No-op when the open number already has a decimal point; with no open
    /// number a new `"0."` is started.
    pub fn append_decimal_point(&mut self) {
        match self.tokens.last_mut() {
            Some(Token::Number(open)) => {
                if !open.contains('.') {
                    open.push('.');
                }
            }
            _ => self.tokens.push(Token::Number("0.".to_string())),
        }
    }

    /// Handle the combined parenthesis key, returning the token appended.
    ///
    /// ```rust
    /// use tapcalc::core::{ExpressionBuffer, ParenMode, Token};
    ///
    /// let mut buffer = ExpressionBuffer::new();
    /// assert_eq!(buffer.open_or_close_paren(ParenMode::Toggle), Token::LeftParen);
    /// buffer.push_digit('2');
    /// assert_eq!(buffer.open_or_close_paren(ParenMode::Toggle), Token::RightParen);
    /// assert_eq!(buffer.render(), "(2)");
    /// ```
    pub fn open_or_close_paren(&mut self, mode: ParenMode) -> Token {
        let close = match mode {
            ParenMode::Toggle => {
                let last_open = self.tokens.iter().rposition(|t| *t == Token::LeftParen);
                let last_close = self.tokens.iter().rposition(|t| *t == Token::RightParen);
                match (last_open, last_close) {
                    (Some(open), Some(close)) => open > close,
                    (Some(_), None) => true,
                    (None, _) => false,
                }
            }
            ParenMode::Balanced => {
                self.depth() > 0 && self.tokens.last().is_some_and(Token::ends_operand)
            }
        };

        let token = if close {
            Token::RightParen
        } else {
            Token::LeftParen
        };
        self.tokens.push(token.clone());
        token
    }

    /// Number of `(` still waiting for a `)`.
    pub fn depth(&self) -> usize {
        self.tokens.iter().fold(0usize, |depth, token| match token {
            Token::LeftParen => depth + 1,
            Token::RightParen => depth.saturating_sub(1),
            _ => depth,
        })
    }

    /// Remove the last character of the last token.
    ///
    /// A number whose text becomes empty (or just a sign) is removed
    /// entirely. Backspacing an empty buffer is a no-op; it still renders
    /// `"0"`.
    pub fn backspace(&mut self) {
        if let Some(Token::Number(digits)) = self.tokens.last_mut() {
            digits.pop();
            if !digits.is_empty() && digits != "-" {
                return;
            }
        }
        self.tokens.pop();
    }

    pub fn clear(&mut self) {
        self.tokens.clear();
    }

    /// Render the expression with keypad glyphs.
    pub fn render(&self) -> String {
        if self.tokens.is_empty() {
            return EMPTY_RENDER.to_string();
        }
        self.tokens.iter().map(Token::text).collect()
    }
}

/// Whether `text` may be appended as number text, given the open number.
fn is_number_text(text: &str, open: Option<&str>) -> bool {
    let body = match (open, text.strip_prefix('-')) {
        (None, Some(unsigned)) => unsigned,
        _ => text,
    };
    let points = |s: &str| s.chars().filter(|&c| c == '.').count();

    !body.is_empty()
        && body.chars().all(|c| c.is_ascii_digit() || c == '.')
        && points(body) + open.map_or(0, points) <= 1
}
