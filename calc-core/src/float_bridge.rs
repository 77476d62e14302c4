//! Conversion boundary between [`Decimal`] and `f64`.
//!
//! Power, root and square-root operations are evaluated in double precision.
//! Every crossing between the two number types goes through this module so the
//! precision trade-off stays in one place.

use rust_decimal::{
    Decimal,
    prelude::{FromPrimitive, ToPrimitive},
};
use tracing::warn;

/// Significant digits kept when a double is brought back into decimal.
///
/// Matches the precision a double can represent reliably, so results such as
/// `27^(1/3) = 3.0000000000000004` come back as an exact `3`.
pub const SIGNIFICANT_DIGITS: u32 = 15;

/// Converts a decimal to the nearest double.
pub fn to_f64(value: Decimal) -> f64 {
    // Every Decimal is within f64 range, so this never fails in practice.
    value.to_f64().unwrap_or(0.0)
}

/// Converts a double back to decimal, rounded to [`SIGNIFICANT_DIGITS`].
///
/// Returns `None` for NaN, infinities and magnitudes outside the decimal range.
pub fn from_f64(value: f64) -> Option<Decimal> {
    if !value.is_finite() {
        return None;
    }
    let decimal = Decimal::from_f64(value)?;
    let rounded = decimal.round_sf(SIGNIFICANT_DIGITS).unwrap_or(decimal);
    Some(rounded.normalize())
}

/// Runs `op` in double precision and converts the result back to decimal.
///
/// Non-finite or unrepresentable results collapse to zero.
pub fn eval_f64(
    name: &'static str,
    op: impl FnOnce() -> f64,
) -> Decimal {
    let raw = op();
    match from_f64(raw) {
        Some(value) => value,
        None => {
            warn!(operation = name, result = raw, "non-finite result collapsed to zero");
            Decimal::ZERO
        }
    }
}
