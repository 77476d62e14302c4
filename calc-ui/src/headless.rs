//! Runs the calculator without a window.
//!
//! Used by `calc --keys "..."` to script key sequences from a shell.

use calc_core::Calculator;
use tracing::info;

use crate::keypad::token_for_label;

/// Presses each whitespace-separated key and returns the final display.
///
/// Keys may be canonical tokens (`"*"`, `"sqrt"`) or keypad labels (`"×"`,
/// `"√"`). Unknown keys are ignored, as they are by the calculator itself.
///
/// ```
/// use calc_ui::headless::run_keys;
///
/// assert_eq!(run_keys("1 2 × 3 ="), "36");
/// ```
pub fn run_keys(keys: &str) -> String {
    let mut calculator = Calculator::new();
    let mut pressed = 0usize;
    for key in keys.split_whitespace() {
        let token = token_for_label(key).unwrap_or(key);
        calculator.handle_key(token);
        pressed += 1;
    }
    let shown = calculator.display();
    info!(pressed, display = %shown, "headless run finished");
    shown
}
