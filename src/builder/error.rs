//! Configuration and build errors.

use thiserror::Error;

/// A single problem found while validating a calculator configuration.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Decimal places ({found}) exceed the supported maximum ({max})")]
    DecimalPlacesOutOfRange { found: u32, max: u32 },

    #[error("History limit must keep at least one entry")]
    ZeroHistoryLimit,

    #[error("Overflow limit must be finite and positive, got {0}")]
    InvalidOverflowLimit(f64),
}

/// Errors that can occur when building a calculator.
#[derive(Debug, Error)]
pub enum BuildError {
    /// Every problem in the configuration, not just the first
    #[error("Invalid calculator configuration: {}", join(.0))]
    InvalidConfig(Vec<ConfigError>),
}

fn join(errors: &[ConfigError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
