//! Builder API for configuring calculators.
//!
//! This module provides a fluent builder over `CalculatorConfig`, validation
//! that reports every invalid setting at once, and the `state_enum!` macro
//! used to declare calculator modes.

pub mod calculator;
pub mod config;
pub mod error;
pub mod macros;

pub use calculator::CalculatorBuilder;
pub use config::CalculatorConfig;
pub use error::{BuildError, ConfigError};
