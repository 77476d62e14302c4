//! Canonical key tokens accepted by the calculator.
//!
//! The keypad layer maps whatever labels it shows on its buttons to these
//! tokens; the state machine only ever sees a [`Key`].

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a string is not one of the canonical key tokens.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown key token '{0}'")]
pub struct UnknownKeyError(pub String);

/// Binary operators that can be pending between two operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    /// Root of degree `a` (the left operand) of `b` (the right operand).
    NthRoot,
}

impl Operator {
    pub const ALL: [Operator; 6] = [
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::Power,
        Self::NthRoot,
    ];

    /// Canonical token for this operator.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Power => "^",
            Self::NthRoot => "nthRoot",
        }
    }

    /// Symbol shown on a keypad button.
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "−",
            Self::Multiply => "×",
            Self::Divide => "÷",
            Self::Power => "^",
            Self::NthRoot => "y√x",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.as_str() == s)
    }
}

impl fmt::Display for Operator {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One key press delivered to the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// A decimal digit, always `0..=9`.
    Digit(u8),
    DecimalPoint,
    Operator(Operator),
    Equals,
    Clear,
    Backspace,
    SquareRoot,
}

impl FromStr for Key {
    type Err = UnknownKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = match s {
            "." => Self::DecimalPoint,
            "=" => Self::Equals,
            "C" => Self::Clear,
            "backspace" => Self::Backspace,
            "sqrt" => Self::SquareRoot,
            _ => {
                if let [b @ b'0'..=b'9'] = s.as_bytes() {
                    Self::Digit(b - b'0')
                } else if let Some(op) = Operator::parse(s) {
                    Self::Operator(op)
                } else {
                    return Err(UnknownKeyError(s.to_string()));
                }
            }
        };
        Ok(key)
    }
}

impl fmt::Display for Key {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::Digit(d) => write!(f, "{d}"),
            Self::DecimalPoint => f.write_str("."),
            Self::Operator(op) => fmt::Display::fmt(op, f),
            Self::Equals => f.write_str("="),
            Self::Clear => f.write_str("C"),
            Self::Backspace => f.write_str("backspace"),
            Self::SquareRoot => f.write_str("sqrt"),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parses_every_digit() {
        for d in 0..=9u8 {
            let key: Key = d.to_string().parse().unwrap();

            assert_eq!(key, Key::Digit(d));
        }
    }

    #[test]
    fn parses_operator_tokens() {
        assert_eq!("+".parse::<Key>().unwrap(), Key::Operator(Operator::Add));
        assert_eq!("-".parse::<Key>().unwrap(), Key::Operator(Operator::Subtract));
        assert_eq!("*".parse::<Key>().unwrap(), Key::Operator(Operator::Multiply));
        assert_eq!("/".parse::<Key>().unwrap(), Key::Operator(Operator::Divide));
        assert_eq!("^".parse::<Key>().unwrap(), Key::Operator(Operator::Power));
        assert_eq!(
            "nthRoot".parse::<Key>().unwrap(),
            Key::Operator(Operator::NthRoot)
        );
    }

    #[test]
    fn parses_command_tokens() {
        assert_eq!(".".parse::<Key>().unwrap(), Key::DecimalPoint);
        assert_eq!("=".parse::<Key>().unwrap(), Key::Equals);
        assert_eq!("C".parse::<Key>().unwrap(), Key::Clear);
        assert_eq!("backspace".parse::<Key>().unwrap(), Key::Backspace);
        assert_eq!("sqrt".parse::<Key>().unwrap(), Key::SquareRoot);
    }

    #[test]
    fn rejects_unknown_tokens() {
        assert_eq!(
            "12".parse::<Key>(),
            Err(UnknownKeyError("12".to_string()))
        );
        assert!("c".parse::<Key>().is_err());
        assert!("÷".parse::<Key>().is_err());
        assert!("".parse::<Key>().is_err());
    }

    #[test]
    fn display_returns_canonical_token() {
        for token in ["7", ".", "+", "nthRoot", "=", "C", "backspace", "sqrt"] {
            let key: Key = token.parse().unwrap();

            assert_eq!(key.to_string(), token);
        }
    }

    #[test]
    fn operator_symbols_are_keypad_labels() {
        assert_eq!(Operator::Divide.symbol(), "÷");
        assert_eq!(Operator::NthRoot.symbol(), "y√x");
    }
}
