//! State trait for calculator modes.
//!
//! Modes implement this trait so the state machine and the presentation
//! layer can inspect them without matching on concrete variants.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine states.
///
/// All methods are pure. States are small immutable values describing
/// where the machine currently is.
///
/// # Example
///
/// ```rust
/// use tapcalc::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Overlay {
///     Hidden,
///     Shown,
/// }
///
/// impl State for Overlay {
///     fn name(&self) -> &str {
///         match self {
///             Self::Hidden => "Hidden",
///             Self::Shown => "Shown",
///         }
///     }
/// }
///
/// assert_eq!(Overlay::Shown.name(), "Shown");
/// assert!(!Overlay::Shown.is_error());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is an error state.
    ///
    /// Default implementation returns `false`.
    fn is_error(&self) -> bool {
        false
    }
}
