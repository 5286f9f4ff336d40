//! Recursive-descent evaluator over buffer tokens.
//!
//! Grammar, loosest binding first:
//!
//! ```text
//! expression := term (('+' | '-') term)*
//! term       := factor (('×' | '÷') factor)*
//! factor     := primary '%'*
//! primary    := number | '(' expression ')'
//! ```
//!
//! Operators of equal precedence associate to the left. Arithmetic is plain
//! IEEE-754 double precision; rounding for display happens elsewhere.
//! Nesting deeper than `MAX_NESTING` is malformed, which bounds recursion.

use super::error::EvalError;
use crate::core::{Operator, Token};

const LOOSEST: u8 = 1;
const TIGHTEST: u8 = 2;

/// Deepest parenthesis nesting the evaluator accepts.
pub const MAX_NESTING: usize = 256;

/// Pure evaluator for token sequences.
///
/// # Example
///
/// ```rust
/// use tapcalc::core::{Operator, Token};
/// use tapcalc::eval::Evaluator;
///
/// let tokens = vec![
///     Token::Number("7".into()),
///     Token::Operator(Operator::Add),
///     Token::Number("3".into()),
///     Token::Operator(Operator::Mul),
///     Token::Number("2".into()),
/// ];
///
/// assert_eq!(Evaluator::new().evaluate(&tokens), Ok(13.0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Evaluator {
    overflow_limit: f64,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluator {
    /// Evaluator that only rejects non-finite values.
    pub fn new() -> Self {
        Self {
            overflow_limit: f64::MAX,
        }
    }

    /// Evaluator that also rejects magnitudes above `limit`.
    pub fn with_overflow_limit(limit: f64) -> Self {
        Self {
            overflow_limit: limit,
        }
    }

    /// Evaluate a full token sequence.
    ///
    /// Never panics: every input either yields a finite value or one of the
    /// three `EvalError` kinds.
    pub fn evaluate(&self, tokens: &[Token]) -> Result<f64, EvalError> {
        if tokens.is_empty() {
            return Err(EvalError::MalformedExpression);
        }

        let mut parser = Parser {
            tokens,
            pos: 0,
            depth: 0,
            overflow_limit: self.overflow_limit,
        };
        let value = parser.binary(LOOSEST)?;

        // Anything left over is a stray `)` or an operand with no operator.
        if parser.pos != tokens.len() {
            return Err(EvalError::MalformedExpression);
        }
        Ok(value)
    }
}

/// Evaluate with the default evaluator.
pub fn evaluate(tokens: &[Token]) -> Result<f64, EvalError> {
    Evaluator::new().evaluate(tokens)
}

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    depth: usize,
    overflow_limit: f64,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.pos);
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn binary(&mut self, level: u8) -> Result<f64, EvalError> {
        if level > TIGHTEST {
            return self.factor();
        }

        let mut value = self.binary(level + 1)?;
        while let Some(&Token::Operator(op)) = self.peek() {
            if op.precedence() != level {
                break;
            }
            self.pos += 1;
            let rhs = self.binary(level + 1)?;
            value = self.apply(op, value, rhs)?;
        }
        Ok(value)
    }

    fn factor(&mut self) -> Result<f64, EvalError> {
        let mut value = self.primary()?;
        while let Some(Token::Percent) = self.peek() {
            self.pos += 1;
            value = self.check(value / 100.0)?;
        }
        Ok(value)
    }

    fn primary(&mut self) -> Result<f64, EvalError> {
        match self.advance() {
            Some(Token::Number(text)) => self.literal(text),
            Some(Token::LeftParen) => {
                if self.depth >= MAX_NESTING {
                    return Err(EvalError::MalformedExpression);
                }
                self.depth += 1;
                let value = self.binary(LOOSEST)?;
                self.depth -= 1;
                match self.advance() {
                    Some(Token::RightParen) => Ok(value),
                    _ => Err(EvalError::MalformedExpression),
                }
            }
            _ => Err(EvalError::MalformedExpression),
        }
    }

    fn literal(&self, text: &str) -> Result<f64, EvalError> {
        let value = text
            .parse::<f64>()
            .map_err(|_| EvalError::MalformedExpression)?;
        self.check(value)
    }

    fn apply(&self, op: Operator, lhs: f64, rhs: f64) -> Result<f64, EvalError> {
        let value = match op {
            Operator::Add => lhs + rhs,
            Operator::Sub => lhs - rhs,
            Operator::Mul => lhs * rhs,
            Operator::Div => {
                if rhs == 0.0 {
                    return Err(EvalError::DivisionByZero);
                }
                lhs / rhs
            }
        };
        self.check(value)
    }

    fn check(&self, value: f64) -> Result<f64, EvalError> {
        if value.is_finite() && value.abs() <= self.overflow_limit {
            Ok(value)
        } else {
            Err(EvalError::Overflow)
        }
    }
}
