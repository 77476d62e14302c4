//! Keypad layout and the mapping from button labels to key tokens.
//!
//! Buttons show typographic symbols (`÷`, `×`, `−`, `⌫`, ...); the calculator
//! core only understands its canonical tokens, so every label is translated
//! here before it reaches [`calc_core::Calculator::handle_key`].

use calc_core::Operator;

/// One button on the keypad.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeypadButton {
    /// Text shown on the button.
    pub label: &'static str,
    /// Canonical token sent to the calculator.
    pub token: &'static str,
}

impl KeypadButton {
    pub const fn new(
        label: &'static str,
        token: &'static str,
    ) -> Self {
        Self { label, token }
    }

    const fn same(token: &'static str) -> Self {
        Self::new(token, token)
    }

    /// Button for a binary operator, labelled with the operator's own symbol.
    pub const fn operator(op: Operator) -> Self {
        Self::new(op.symbol(), op.as_str())
    }
}

/// Button grid, top row first.
pub const KEYPAD_ROWS: &[&[KeypadButton]] = &[
    &[
        KeypadButton::same("7"),
        KeypadButton::same("8"),
        KeypadButton::same("9"),
        KeypadButton::operator(Operator::Divide),
    ],
    &[
        KeypadButton::same("4"),
        KeypadButton::same("5"),
        KeypadButton::same("6"),
        KeypadButton::operator(Operator::Multiply),
    ],
    &[
        KeypadButton::same("1"),
        KeypadButton::same("2"),
        KeypadButton::same("3"),
        KeypadButton::operator(Operator::Subtract),
    ],
    &[
        KeypadButton::same("0"),
        KeypadButton::same("."),
        KeypadButton::same("="),
        KeypadButton::operator(Operator::Add),
    ],
    &[
        KeypadButton::same("C"),
        KeypadButton::new("⌫", "backspace"),
        KeypadButton::new("√", "sqrt"),
        KeypadButton::operator(Operator::Power),
        KeypadButton::operator(Operator::NthRoot),
    ],
];

/// Iterates over every button in reading order.
pub fn buttons() -> impl Iterator<Item = &'static KeypadButton> {
    KEYPAD_ROWS.iter().flat_map(|row| row.iter())
}

/// Returns the canonical token for a button label, if the keypad has one.
pub fn token_for_label(label: &str) -> Option<&'static str> {
    buttons().find(|b| b.label == label).map(|b| b.token)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use calc_core::Key;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn every_button_sends_a_canonical_token() {
        for button in buttons() {
            assert!(
                button.token.parse::<Key>().is_ok(),
                "button '{}' sends unknown token '{}'",
                button.label,
                button.token
            );
        }
    }

    #[test]
    fn keypad_covers_every_key() {
        let tokens: HashSet<&str> = buttons().map(|b| b.token).collect();

        for expected in [
            "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", ".", "+", "-", "*", "/", "=", "C",
            "backspace", "sqrt", "^", "nthRoot",
        ] {
            assert!(tokens.contains(expected), "missing token '{expected}'");
        }
    }

    #[test]
    fn labels_are_unique() {
        let labels: HashSet<&str> = buttons().map(|b| b.label).collect();

        assert_eq!(labels.len(), buttons().count());
    }

    #[test]
    fn symbol_labels_map_to_tokens() {
        assert_eq!(token_for_label("÷"), Some("/"));
        assert_eq!(token_for_label("×"), Some("*"));
        assert_eq!(token_for_label("−"), Some("-"));
        assert_eq!(token_for_label("⌫"), Some("backspace"));
        assert_eq!(token_for_label("√"), Some("sqrt"));
        assert_eq!(token_for_label("y√x"), Some("nthRoot"));
        assert_eq!(token_for_label("7"), Some("7"));
    }

    #[test]
    fn operator_buttons_use_core_symbols() {
        for op in Operator::ALL {
            assert_eq!(token_for_label(op.symbol()), Some(op.as_str()));
        }
    }

    #[test]
    fn rows_follow_keypad_layout() {
        let rows: Vec<Vec<&str>> = KEYPAD_ROWS
            .iter()
            .map(|row| row.iter().map(|b| b.label).collect())
            .collect();

        assert_eq!(
            rows,
            vec![
                vec!["7", "8", "9", "÷"],
                vec!["4", "5", "6", "×"],
                vec!["1", "2", "3", "−"],
                vec!["0", ".", "=", "+"],
                vec!["C", "⌫", "√", "^", "y√x"],
            ]
        );
    }

    #[test]
    fn unknown_label_has_no_token() {
        assert_eq!(token_for_label("%"), None);
    }
}
