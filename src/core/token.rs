//! Tokens held by the expression buffer.
//!
//! Numbers keep the literal text the user typed (including a trailing `.`)
//! until evaluation, so the rendered expression always matches the keypad.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Binary arithmetic operator.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    /// Glyph shown on the keypad and in the rendered expression.
    pub fn glyph(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '×',
            Self::Div => '÷',
        }
    }

    /// Binding strength: `×` and `÷` bind tighter than `+` and `-`.
    pub fn precedence(&self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
        }
    }

    /// Parse a keypad glyph or its ASCII alias.
    pub fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            '+' => Some(Self::Add),
            '-' | '−' => Some(Self::Sub),
            '×' | '*' | 'x' | 'X' => Some(Self::Mul),
            '÷' | '/' => Some(Self::Div),
            _ => None,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// A single element of the expression being typed.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub enum Token {
    /// Literal number text, e.g. `"12"`, `"0."`, `"3.5"`.
    Number(String),
    Operator(Operator),
    LeftParen,
    RightParen,
    /// Postfix percent: divides the preceding operand by 100.
    Percent,
}

impl Token {
    /// Textual form of the token as it appears in the rendered expression.
    pub fn text(&self) -> String {
        match self {
            Self::Number(digits) => digits.clone(),
            Self::Operator(op) => op.glyph().to_string(),
            Self::LeftParen => "(".to_string(),
            Self::RightParen => ")".to_string(),
            Self::Percent => "%".to_string(),
        }
    }

    pub fn is_operator(&self) -> bool {
        matches!(self, Self::Operator(_))
    }

    /// Whether an operand can end at this token (so an operator, `)` or `%`
    /// may follow it).
    pub fn ends_operand(&self) -> bool {
        matches!(self, Self::Number(_) | Self::RightParen | Self::Percent)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(digits) => f.write_str(digits),
            Self::Operator(op) => write!(f, "{op}"),
            Self::LeftParen => f.write_str("("),
            Self::RightParen => f.write_str(")"),
            Self::Percent => f.write_str("%"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operator_glyphs_match_keypad() {
        assert_eq!(Operator::Add.glyph(), '+');
        assert_eq!(Operator::Sub.glyph(), '-');
        assert_eq!(Operator::Mul.glyph(), '×');
        assert_eq!(Operator::Div.glyph(), '÷');
    }

    #[test]
    fn from_glyph_accepts_ascii_aliases() {
        assert_eq!(Operator::from_glyph('*'), Some(Operator::Mul));
        assert_eq!(Operator::from_glyph('/'), Some(Operator::Div));
        assert_eq!(Operator::from_glyph('÷'), Some(Operator::Div));
        assert_eq!(Operator::from_glyph('%'), None);
    }

    #[test]
    fn multiplicative_operators_bind_tighter() {
        assert!(Operator::Mul.precedence() > Operator::Add.precedence());
        assert_eq!(Operator::Mul.precedence(), Operator::Div.precedence());
        assert_eq!(Operator::Add.precedence(), Operator::Sub.precedence());
    }

    #[test]
    fn token_text_keeps_literal_number() {
        assert_eq!(Token::Number("12.".to_string()).text(), "12.");
        assert_eq!(Token::Operator(Operator::Mul).to_string(), "×");
        assert_eq!(Token::Percent.text(), "%");
    }

    #[test]
    fn ends_operand_classifies_tokens() {
        assert!(Token::Number("1".into()).ends_operand());
        assert!(Token::RightParen.ends_operand());
        assert!(Token::Percent.ends_operand());
        assert!(!Token::LeftParen.ends_operand());
        assert!(!Token::Operator(Operator::Add).ends_operand());
    }
}
