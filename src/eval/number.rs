//! Result rounding and number formatting.

/// Decimal places kept for stored and displayed results.
pub const DEFAULT_DECIMAL_PLACES: u32 = 8;

/// Largest decimal places a double can meaningfully carry.
pub const MAX_DECIMAL_PLACES: u32 = 15;

// 2^53: above this, scaled values are already integers.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Round `value` to `places` decimal places.
///
/// Values too large to scale without losing integer precision are returned
/// unchanged. Negative zero is normalised to zero.
///
/// ```rust
/// use tapcalc::eval::round_to;
///
/// assert_eq!(round_to(0.1 + 0.2, 8), 0.3);
/// assert_eq!(round_to(1.0 / 3.0, 8), 0.33333333);
/// assert_eq!(round_to(1e300, 8), 1e300);
/// ```
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places.min(MAX_DECIMAL_PLACES) as i32);
    let scaled = value * factor;
    let rounded = if !scaled.is_finite() || scaled.abs() >= MAX_EXACT_INTEGER {
        value
    } else {
        scaled.round() / factor
    };
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Format a number as plain decimal text, never in exponent form.
///
/// ```rust
/// use tapcalc::eval::format_number;
///
/// assert_eq!(format_number(13.0), "13");
/// assert_eq!(format_number(0.5), "0.5");
/// assert_eq!(format_number(-2.0), "-2");
/// assert_eq!(format_number(-0.0), "0");
/// ```
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{value}")
}
