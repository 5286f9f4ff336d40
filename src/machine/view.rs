//! Render-ready snapshot of the calculator.

use super::mode::Mode;
use serde::{Deserialize, Serialize};

/// Everything the presentation layer needs to draw the screen.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DisplayView {
    /// The expression as typed, with keypad glyphs
    pub expression_text: String,
    /// Live preview, result, or error message
    pub display_text: String,
    pub is_error: bool,
    pub mode: Mode,
    /// Whether the history overlay should be visible
    pub history_open: bool,
    /// `"<expression> = <result>"` lines, oldest first
    pub history_entries: Vec<String>,
}

impl DisplayView {
    /// Serialize the view for a non-Rust presentation layer.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
