use calc_core::Calculator;
use gpui::{
    ClickEvent, Context, FontWeight, IntoElement, ParentElement, Render, SharedString, Styled,
    TextAlign, Window, div, px,
};
use gpui_component::{h_flex, v_flex};
use tracing::debug;

use crate::{components::make_key_button, keypad::KEYPAD_ROWS};

/// Display plus keypad, owning the calculator it drives.
///
/// The view is only touched from the UI thread, so the calculator needs no
/// locking.
pub struct CalculatorView {
    calculator: Calculator,
    display: SharedString,
}

impl CalculatorView {
    pub fn new() -> Self {
        let calculator = Calculator::new();
        let display = calculator.display().into();
        Self {
            calculator,
            display,
        }
    }

    /// Sends one canonical token to the calculator and refreshes the display.
    pub fn press(
        &mut self,
        token: &str,
    ) {
        self.display = self.calculator.handle_key(token).into();
        debug!(token, display = %self.display, "keypad press");
    }

    pub fn display(&self) -> &SharedString {
        &self.display
    }
}

impl Default for CalculatorView {
    fn default() -> Self {
        Self::new()
    }
}

impl Render for CalculatorView {
    fn render(
        &mut self,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let mut keypad = v_flex().gap_2();
        for row in KEYPAD_ROWS {
            let mut line = h_flex().gap_2();
            for button in row.iter() {
                let token = button.token;
                line = line.child(make_key_button(
                    format!("key-{token}"),
                    button.label,
                    cx.listener(move |this: &mut Self, _: &ClickEvent, _, cx| {
                        this.press(token);
                        cx.notify();
                    }),
                ));
            }
            keypad = keypad.child(line);
        }

        v_flex()
            .gap_4()
            .p_5()
            .child(
                div()
                    .w_full()
                    .min_w(px(272.))
                    .p_3()
                    .rounded_md()
                    .border_1()
                    .text_2xl()
                    .font_weight(FontWeight::BOLD)
                    .text_align(TextAlign::Right)
                    .child(self.display.clone()),
            )
            .child(keypad)
    }
}
