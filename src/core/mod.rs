//! Core calculator types.
//!
//! This module contains the leaf data of the calculator:
//! - Tokens and the expression buffer that holds them
//! - The append-only computation history
//! - The `State` trait implemented by calculator modes
//!
//! Nothing in this module evaluates expressions or performs I/O.

mod buffer;
mod error;
mod history;
mod state;
mod token;

pub use buffer::{ExpressionBuffer, ParenMode, EMPTY_RENDER};
pub use error::BufferError;
pub use history::{History, HistoryEntry, LINE_SEPARATOR};
pub use state::State;
pub use token::{Operator, Token};
