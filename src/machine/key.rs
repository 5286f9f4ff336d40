//! Key events accepted by the calculator.

use crate::core::Operator;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// A single keypad event.
///
/// The presentation layer maps physical buttons to these values; the
/// string form of each button is accepted by `Key::from_str`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Key {
    /// A digit `0`-`9`; anything larger is ignored by the calculator
    Digit(u8),
    DecimalPoint,
    Operator(Operator),
    /// The combined `()` key
    Paren,
    Percent,
    Backspace,
    Clear,
    Equals,
    OpenHistory,
    CloseHistory,
    /// Pick an entry from the history overlay by position
    SelectHistory(usize),
}

/// Errors produced when parsing a key symbol.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum KeyError {
    #[error("Unknown key symbol '{0}'")]
    Unknown(String),
}

impl Key {
    /// Keypad symbol for this key.
    pub fn symbol(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::DecimalPoint => ".".to_string(),
            Self::Operator(op) => op.glyph().to_string(),
            Self::Paren => "()".to_string(),
            Self::Percent => "%".to_string(),
            Self::Backspace => "⌫".to_string(),
            Self::Clear => "C".to_string(),
            Self::Equals => "=".to_string(),
            Self::OpenHistory => "H".to_string(),
            Self::CloseHistory => "esc".to_string(),
            Self::SelectHistory(index) => format!("H{index}"),
        }
    }

    /// Character for a digit key, if it is a valid digit.
    pub fn digit_char(&self) -> Option<char> {
        match self {
            Self::Digit(d) => char::from_digit(u32::from(*d), 10),
            _ => None,
        }
    }
}

impl FromStr for Key {
    type Err = KeyError;

    /// Parse a keypad symbol.
    ///
    /// ```rust
    /// use tapcalc::core::Operator;
    /// use tapcalc::machine::Key;
    ///
    /// assert_eq!("7".parse(), Ok(Key::Digit(7)));
    /// assert_eq!("×".parse(), Ok(Key::Operator(Operator::Mul)));
    /// assert_eq!("*".parse(), Ok(Key::Operator(Operator::Mul)));
    /// assert_eq!("()".parse(), Ok(Key::Paren));
    /// assert!("sin".parse::<Key>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbol = s.trim();
        let key = match symbol {
            "." => Self::DecimalPoint,
            "(" | ")" | "()" => Self::Paren,
            "%" => Self::Percent,
            "⌫" | "<" | "backspace" => Self::Backspace,
            "C" | "c" => Self::Clear,
            "=" => Self::Equals,
            "H" | "h" => Self::OpenHistory,
            "esc" | "Escape" => Self::CloseHistory,
            _ => {
                let mut chars = symbol.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => match ch.to_digit(10) {
                        Some(d) => Self::Digit(d as u8),
                        None => Operator::from_glyph(ch)
                            .map(Self::Operator)
                            .ok_or_else(|| KeyError::Unknown(symbol.to_string()))?,
                    },
                    _ => {
                        let index = symbol
                            .strip_prefix('H')
                            .and_then(|rest| rest.parse::<usize>().ok())
                            .ok_or_else(|| KeyError::Unknown(symbol.to_string()))?;
                        Self::SelectHistory(index)
                    }
                }
            }
        };
        Ok(key)
    }
}
