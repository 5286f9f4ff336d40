//! Builder for constructing calculators.

use crate::builder::config::CalculatorConfig;
use crate::builder::error::BuildError;
use crate::core::ParenMode;
use crate::machine::Calculator;
use stillwater::validation::Validation;

/// Builder for constructing calculators with a fluent API.
///
/// # Example
///
/// ```rust
/// use tapcalc::builder::CalculatorBuilder;
/// use tapcalc::core::ParenMode;
///
/// let calculator = CalculatorBuilder::new()
///     .decimal_places(4)
///     .history_limit(100)
///     .paren_mode(ParenMode::Balanced)
///     .build()
///     .unwrap();
///
/// assert_eq!(calculator.config().decimal_places, 4);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CalculatorBuilder {
    config: CalculatorConfig,
}

impl CalculatorBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            config: CalculatorConfig::default(),
        }
    }

    /// Set the decimal places kept for results.
    pub fn decimal_places(mut self, places: u32) -> Self {
        self.config.decimal_places = places;
        self
    }

    /// Keep at most `limit` history entries.
    pub fn history_limit(mut self, limit: usize) -> Self {
        self.config.history_limit = Some(limit);
        self
    }

    /// Keep every history entry for the session (the default).
    pub fn unbounded_history(mut self) -> Self {
        self.config.history_limit = None;
        self
    }

    /// Choose how the `()` key behaves.
    pub fn paren_mode(mut self, mode: ParenMode) -> Self {
        self.config.paren_mode = mode;
        self
    }

    /// Set the largest magnitude accepted before reporting overflow.
    pub fn overflow_limit(mut self, limit: f64) -> Self {
        self.config.overflow_limit = limit;
        self
    }

    /// Build the calculator.
    /// Returns an error listing every invalid setting.
    pub fn build(self) -> Result<Calculator, BuildError> {
        match self.config.validate() {
            Validation::Success(_) => Ok(Calculator::with_config(self.config)),
            Validation::Failure(errors) => Err(BuildError::InvalidConfig(
                errors.iter().cloned().collect(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::error::ConfigError;
    use crate::machine::{Key, Mode};

    #[test]
    fn default_builder_builds() {
        let calculator = CalculatorBuilder::new().build().unwrap();
        assert_eq!(calculator.mode(), Mode::Entering);
        assert_eq!(calculator.config(), &CalculatorConfig::default());
    }

    #[test]
    fn builder_reports_every_invalid_setting() {
        let result = CalculatorBuilder::new()
            .decimal_places(99)
            .history_limit(0)
            .build();

        match result {
            Err(BuildError::InvalidConfig(errors)) => {
                assert_eq!(errors.len(), 2);
                assert!(errors.contains(&ConfigError::ZeroHistoryLimit));
            }
            Ok(_) => panic!("Expected invalid configuration"),
        }
    }

    #[test]
    fn history_limit_is_applied() {
        let mut calculator = CalculatorBuilder::new().history_limit(1).build().unwrap();

        for key in [Key::Digit(1), Key::Equals, Key::Digit(2), Key::Equals] {
            calculator.press(key);
        }

        assert_eq!(calculator.history().len(), 1);
        assert_eq!(calculator.history().lines(), vec!["2 = 2"]);
    }

    #[test]
    fn decimal_places_control_rounding() {
        let mut calculator = CalculatorBuilder::new().decimal_places(2).build().unwrap();

        for key in [
            Key::Digit(1),
            Key::Operator(crate::core::Operator::Div),
            Key::Digit(3),
            Key::Equals,
        ] {
            calculator.press(key);
        }

        assert_eq!(calculator.last_result(), Some(0.33));
    }

    #[test]
    fn unbounded_history_clears_limit() {
        let builder = CalculatorBuilder::new().history_limit(5).unbounded_history();
        let calculator = builder.build().unwrap();
        assert_eq!(calculator.config().history_limit, None);
    }
}
