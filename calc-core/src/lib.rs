//! Keypad calculator core.
//!
//! Turns a stream of key tokens into a running decimal computation. The whole
//! state machine lives in [`state`]; arithmetic is in [`arithmetic`] and the
//! `Decimal`/`f64` boundary used by power and root operations is kept in
//! [`float_bridge`].
//!
//! # Example
//!
//! ```
//! use calc_core::Calculator;
//!
//! let mut calc = Calculator::new();
//! for token in ["3", "+", "4", "+", "5"] {
//!     calc.handle_key(token);
//! }
//! assert_eq!(calc.handle_key("="), "12");
//! ```

pub mod arithmetic;
pub mod error;
pub mod float_bridge;
pub mod format;
pub mod key;
pub mod state;

pub use error::CalcError;
pub use key::{Key, Operator, UnknownKeyError};
pub use state::{Calculator, CalculatorState, Entry};
