/// Absolute tolerance within which two numbers compare equal.
pub const EQUALITY_TOLERANCE: f64 = 1e-8;

/// Returns `true` if `a` and `b` differ by at most [`EQUALITY_TOLERANCE`].
///
/// # Example
/// ```
/// use treelox::util::num::approx_eq;
///
/// assert!(approx_eq(1.0, 1.0 + 5e-9));
/// assert!(!approx_eq(1.0, 1.1));
/// ```
#[must_use]
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= EQUALITY_TOLERANCE
}

/// Renders a number in fixed-point notation with six fractional digits,
/// the way C's `%f` does.
///
/// Non-finite values render as `nan`, `inf` and `-inf`.
///
/// # Example
/// ```
/// use treelox::util::num::format_fixed;
///
/// assert_eq!(format_fixed(7.0), "7.000000");
/// assert_eq!(format_fixed(-0.5), "-0.500000");
/// assert_eq!(format_fixed(1.0 / 0.0), "inf");
/// ```
#[must_use]
pub fn format_fixed(value: f64) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else if value.is_infinite() {
        let sign = if value < 0.0 { "-" } else { "" };
        format!("{sign}inf")
    } else {
        format!("{value:.6}")
    }
}
