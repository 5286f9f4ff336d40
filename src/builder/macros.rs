//! Macros for declaring state enums.

/// Declare a unit-variant enum and implement `State` for it.
///
/// The generated enum derives `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`,
/// `Debug`, `Serialize` and `Deserialize`. Variant names double as state
/// names.
///
/// # Example
///
/// ```
/// use tapcalc::state_enum;
/// use tapcalc::core::State;
///
/// state_enum! {
///     pub enum Overlay {
///         Hidden,
///         Shown,
///         Broken,
///     }
///     error: [Broken]
/// }
///
/// assert_eq!(Overlay::Shown.name(), "Shown");
/// assert!(Overlay::Broken.is_error());
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }

        $(error: [$($error:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            fn is_error(&self) -> bool {
                match self {
                    $($(Self::$error => true,)*)?
                    _ => false,
                }
            }
        }
    };
}
