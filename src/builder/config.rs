//! Calculator configuration and its validation.

use crate::builder::error::ConfigError;
use crate::core::ParenMode;
use crate::eval::{DEFAULT_DECIMAL_PLACES, MAX_DECIMAL_PLACES};
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Type alias for a single configuration check.
type ConfigCheck = Validation<(), NonEmptyVec<ConfigError>>;

/// Tunable behaviour of a calculator session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CalculatorConfig {
    /// Decimal places kept when a result is stored and displayed
    pub decimal_places: u32,

    /// Maximum history entries kept; `None` keeps the whole session
    pub history_limit: Option<usize>,

    /// Behaviour of the combined `()` key
    pub paren_mode: ParenMode,

    /// Largest magnitude the evaluator accepts before reporting overflow
    pub overflow_limit: f64,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            decimal_places: DEFAULT_DECIMAL_PLACES,
            history_limit: None,
            paren_mode: ParenMode::Toggle,
            overflow_limit: f64::MAX,
        }
    }
}

impl CalculatorConfig {
    /// Validate every setting, accumulating ALL problems.
    ///
    /// Returns `Validation::Success(())` if the configuration is usable and
    /// `Validation::Failure` with every problem otherwise.
    pub fn validate(&self) -> ConfigCheck {
        let checks = vec![
            self.check_decimal_places(),
            self.check_history_limit(),
            self.check_overflow_limit(),
        ];

        Validation::all_vec(checks).map(|_| ())
    }

    fn check_decimal_places(&self) -> ConfigCheck {
        if self.decimal_places > MAX_DECIMAL_PLACES {
            Validation::fail(ConfigError::DecimalPlacesOutOfRange {
                found: self.decimal_places,
                max: MAX_DECIMAL_PLACES,
            })
        } else {
            Validation::success(())
        }
    }

    fn check_history_limit(&self) -> ConfigCheck {
        if self.history_limit == Some(0) {
            Validation::fail(ConfigError::ZeroHistoryLimit)
        } else {
            Validation::success(())
        }
    }

    fn check_overflow_limit(&self) -> ConfigCheck {
        if self.overflow_limit.is_finite() && self.overflow_limit > 0.0 {
            Validation::success(())
        } else {
            Validation::fail(ConfigError::InvalidOverflowLimit(self.overflow_limit))
        }
    }
}
