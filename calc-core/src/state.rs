//! The calculator state machine.
//!
//! [`CalculatorState`] is a plain value; every key press is the pure
//! transition [`CalculatorState::apply`]. [`Calculator`] wraps a state for
//! callers that deliver raw key tokens and only want the display text back.
//!
//! # Operator chaining
//!
//! There is no expression tree. A binary operator press either loads the
//! typed number into the accumulator (nothing pending) or first folds the
//! pending operation into it, so `3 + 4 + 5 =` evaluates left to right.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{
    arithmetic::{self, compute},
    error::{CalcError, ERROR_DISPLAY},
    format::{parse_entry, to_display_string},
    key::{Key, Operator},
};

/// What the display currently holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Entry {
    /// Text of the number being typed or last computed.
    Number(String),
    /// The last operation was invalid.
    Error(CalcError),
}

impl Entry {
    fn zero() -> Self {
        Self::Number("0".to_string())
    }

    /// Parsed value of the entry, or `None` in the error state.
    pub fn value(&self) -> Option<Decimal> {
        match self {
            Self::Number(text) => parse_entry(text),
            Self::Error(_) => None,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

impl Default for Entry {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Entry {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::Number(text) => f.write_str(text),
            Self::Error(_) => f.write_str(ERROR_DISPLAY),
        }
    }
}

/// Complete state of one calculator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorState {
    /// Number being entered, last result, or the error value.
    pub entry: Entry,
    /// Left operand of the pending operation.
    pub accumulator: Decimal,
    /// Binary operation waiting for its right operand.
    pub pending: Option<Operator>,
    /// Set after `=` or a successful square root; the next digit or decimal
    /// point starts a new number.
    pub just_evaluated: bool,
}

impl CalculatorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text to show on the display.
    pub fn display(&self) -> String {
        self.entry.to_string()
    }

    pub fn is_error(&self) -> bool {
        self.entry.is_error()
    }

    /// Applies one key press and returns the next state.
    pub fn apply(
        mut self,
        key: Key,
    ) -> Self {
        match key {
            Key::Digit(d) => self.append_digit(d),
            Key::DecimalPoint => self.append_decimal_point(),
            Key::Operator(op) => self.apply_operator(op),
            Key::Equals => self.evaluate(),
            Key::Clear => self = Self::default(),
            Key::Backspace => self.backspace(),
            Key::SquareRoot => self.apply_sqrt(),
        }
        debug!(%key, display = %self.entry, pending = ?self.pending, "key applied");
        self
    }

    /// Takes the text of the number being typed, starting a fresh number
    /// when the previous one was a result or an error.
    fn take_typed_text(&mut self) -> String {
        let text = match std::mem::take(&mut self.entry) {
            Entry::Number(text) if !self.just_evaluated => text,
            _ => "0".to_string(),
        };
        self.just_evaluated = false;
        text
    }

    fn append_digit(
        &mut self,
        digit: u8,
    ) {
        let mut text = self.take_typed_text();
        if text == "0" {
            text.clear();
        }
        text.push(char::from(b'0' + digit));
        self.entry = Entry::Number(text);
    }

    fn append_decimal_point(&mut self) {
        let mut text = self.take_typed_text();
        if !text.contains('.') {
            text.push('.');
        }
        self.entry = Entry::Number(text);
    }

    fn apply_operator(
        &mut self,
        op: Operator,
    ) {
        let Some(value) = self.entry.value() else {
            return;
        };

        self.accumulator = match self.pending {
            None => value,
            Some(pending) => compute(self.accumulator, value, pending),
        };
        self.pending = Some(op);
        self.entry = Entry::zero();
        self.just_evaluated = false;
    }

    fn evaluate(&mut self) {
        let Some(op) = self.pending else {
            return;
        };
        let Some(value) = self.entry.value() else {
            return;
        };

        if op == Operator::NthRoot && !arithmetic::root_is_defined(value, self.accumulator) {
            self.fail(CalcError::InvalidRoot {
                radicand: value,
                degree: self.accumulator,
            });
            return;
        }

        self.accumulator = compute(self.accumulator, value, op);
        self.entry = Entry::Number(to_display_string(self.accumulator));
        self.pending = None;
        self.just_evaluated = true;
    }

    fn apply_sqrt(&mut self) {
        let Some(value) = self.entry.value() else {
            return;
        };

        if value < Decimal::ZERO {
            self.fail(CalcError::NegativeSquareRoot { operand: value });
            return;
        }

        self.entry = Entry::Number(to_display_string(arithmetic::sqrt(value)));
        self.just_evaluated = true;
    }

    fn backspace(&mut self) {
        if self.just_evaluated {
            return;
        }
        let Entry::Number(text) = &mut self.entry else {
            return;
        };

        let is_negative_single_digit = text.len() == 2 && text.starts_with('-');
        if text.len() <= 1 || is_negative_single_digit {
            *text = "0".to_string();
        } else {
            text.pop();
        }
    }

    /// Enters the error state. The error is only left by clearing or by
    /// typing a new number, so `just_evaluated` stays false here.
    fn fail(
        &mut self,
        error: CalcError,
    ) {
        warn!(%error, "calculator entered error state");
        self.entry = Entry::Error(error);
        self.pending = None;
        self.just_evaluated = false;
    }
}

/// Calculator driven by canonical key tokens.
///
/// # Example
///
/// ```
/// use calc_core::Calculator;
///
/// let mut calc = Calculator::new();
/// for token in ["2", "^", "1", "0"] {
///     calc.handle_key(token);
/// }
/// assert_eq!(calc.handle_key("="), "1024");
/// assert_eq!(calc.handle_key("C"), "0");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    state: CalculatorState,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one key token and returns the display text.
    ///
    /// Tokens that are not canonical keys leave the state unchanged.
    pub fn handle_key(
        &mut self,
        symbol: &str,
    ) -> String {
        match symbol.parse::<Key>() {
            Ok(key) => self.press(key),
            Err(error) => debug!(%error, "ignoring key"),
        }
        self.display()
    }

    /// Applies an already parsed key.
    pub fn press(
        &mut self,
        key: Key,
    ) {
        self.state = std::mem::take(&mut self.state).apply(key);
    }

    pub fn display(&self) -> String {
        self.state.display()
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }
}
