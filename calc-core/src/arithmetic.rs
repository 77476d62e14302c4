//! Binary and unary arithmetic used by the calculator.
//!
//! Every function here is total: division by zero, decimal overflow and
//! non-finite floating-point results all produce zero instead of an error.

use rust_decimal::Decimal;
use tracing::warn;

use crate::{float_bridge, key::Operator};

/// Tolerance used when deciding whether a root degree is an integer.
pub const INTEGER_TOLERANCE: f64 = 1e-12;

/// Applies `op` to the operands `a` (left) and `b` (right).
///
/// For [`Operator::NthRoot`] `a` is the degree and `b` the radicand.
///
/// # Examples
///
/// ```
/// use calc_core::{Operator, arithmetic::compute};
/// use rust_decimal_macros::dec;
///
/// assert_eq!(compute(dec!(7), dec!(2), Operator::Divide), dec!(3.5));
/// assert_eq!(compute(dec!(7), dec!(0), Operator::Divide), dec!(0));
/// assert_eq!(compute(dec!(3), dec!(27), Operator::NthRoot), dec!(3));
/// ```
pub fn compute(
    a: Decimal,
    b: Decimal,
    op: Operator,
) -> Decimal {
    match op {
        Operator::Add => checked("add", a.checked_add(b)),
        Operator::Subtract => checked("subtract", a.checked_sub(b)),
        Operator::Multiply => checked("multiply", a.checked_mul(b)),
        Operator::Divide => {
            if b.is_zero() {
                Decimal::ZERO
            } else {
                checked("divide", a.checked_div(b))
            }
        }
        Operator::Power => pow(a, b),
        Operator::NthRoot => nth_root(b, a),
    }
}

fn checked(
    name: &'static str,
    result: Option<Decimal>,
) -> Decimal {
    result.unwrap_or_else(|| {
        warn!(operation = name, "decimal overflow collapsed to zero");
        Decimal::ZERO
    })
}

/// Raises `base` to `exponent` in double precision.
pub fn pow(
    base: Decimal,
    exponent: Decimal,
) -> Decimal {
    let base = float_bridge::to_f64(base);
    let exponent = float_bridge::to_f64(exponent);
    float_bridge::eval_f64("pow", || base.powf(exponent))
}

/// Square root in double precision. Negative input yields zero.
pub fn sqrt(value: Decimal) -> Decimal {
    let value = float_bridge::to_f64(value);
    float_bridge::eval_f64("sqrt", || value.sqrt())
}

/// Shape of a root degree as seen by the real-root domain check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Degree {
    pub is_integer: bool,
    pub is_odd: bool,
}

impl Degree {
    pub fn classify(degree: Decimal) -> Self {
        let n = float_bridge::to_f64(degree);
        let rounded = n.round();
        let is_integer = (n - rounded).abs() < INTEGER_TOLERANCE;
        let is_odd = is_integer && rounded.abs() % 2.0 == 1.0;
        Self { is_integer, is_odd }
    }

    /// Whether a root of this degree has a real value for negative radicands.
    pub fn admits_negative_radicand(&self) -> bool {
        self.is_odd
    }
}

/// Whether the real root of degree `degree` of `radicand` is defined.
///
/// Degree zero is reported as defined for non-negative radicands;
/// [`nth_root`] maps it to zero.
pub fn root_is_defined(
    radicand: Decimal,
    degree: Decimal,
) -> bool {
    radicand >= Decimal::ZERO || Degree::classify(degree).admits_negative_radicand()
}

/// Real root of degree `degree` of `radicand`.
///
/// A zero degree, and a negative radicand under an even or fractional degree,
/// both yield zero.
///
/// # Examples
///
/// ```
/// use calc_core::arithmetic::nth_root;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(nth_root(dec!(-8), dec!(3)), dec!(-2));
/// assert_eq!(nth_root(dec!(-4), dec!(2)), dec!(0));
/// assert_eq!(nth_root(dec!(5), dec!(0)), dec!(0));
/// ```
pub fn nth_root(
    radicand: Decimal,
    degree: Decimal,
) -> Decimal {
    if degree.is_zero() {
        return Decimal::ZERO;
    }
    if !root_is_defined(radicand, degree) {
        return Decimal::ZERO;
    }

    let x = float_bridge::to_f64(radicand);
    let n = float_bridge::to_f64(degree);
    float_bridge::eval_f64("nth_root", || {
        if x < 0.0 {
            -x.abs().powf(1.0 / n.abs())
        } else {
            x.powf(1.0 / n)
        }
    })
}
