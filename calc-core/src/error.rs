use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Text shown on the display whenever the calculator is in an error state.
pub const ERROR_DISPLAY: &str = "Error";

/// Invalid operations that put the calculator into its error state.
///
/// The variants carry the offending operands for logging; the display never
/// shows them and always renders [`ERROR_DISPLAY`].
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalcError {
    /// Square root of a negative number.
    #[error("cannot take the square root of negative value {operand}")]
    NegativeSquareRoot { operand: Decimal },

    /// Root of a negative radicand whose degree is not an odd integer.
    #[error("root of degree {degree} is undefined for negative radicand {radicand}")]
    InvalidRoot { radicand: Decimal, degree: Decimal },
}
