//! Decimal rounding.

/// Rounds `x` to `precision` decimal places.
///
/// Halfway values round toward positive infinity, so `round(-2.5, 0)` is `-2.0`
/// while `round(2.5, 0)` is `3.0`. A negative precision rounds to tens,
/// hundreds and so on.
pub fn round(x: f64, precision: i32) -> f64 {
    let scale = 10f64.powi(precision);
    (x * scale + 0.5).floor() / scale
}

/// Rounds `x` to the nearest integer, halves toward positive infinity.
pub fn round_int(x: f64) -> f64 {
    round(x, 0)
}
