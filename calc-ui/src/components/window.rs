use gpui::{
    App, AppContext, Context, Entity, IntoElement, ParentElement, Render, Styled, Subscription,
    Window,
};
use gpui_component::v_flex;
use tracing::info;

#[cfg(not(target_os = "linux"))]
use crate::Quit;
#[cfg(not(target_os = "linux"))]
use crate::quit;

use super::CalculatorView;

/// Root view of the calculator window.
///
/// Owns the calculator view; closing the window quits the application except
/// on Linux, where the app stays alive until the quit action.
pub struct AppWindow {
    calculator: Entity<CalculatorView>,
    _window_close_subscription: Subscription,
}

impl AppWindow {
    pub fn new(cx: &mut Context<Self>) -> Self {
        let calculator = cx.new(|_| CalculatorView::new());
        let subscription = cx.on_window_closed(|_cx: &mut App| {
            info!("Calculator window closed");
            #[cfg(not(target_os = "linux"))]
            quit(&Quit, _cx);
        });

        Self {
            calculator,
            _window_close_subscription: subscription,
        }
    }

    pub fn calculator(&self) -> &Entity<CalculatorView> {
        &self.calculator
    }
}

impl Render for AppWindow {
    fn render(
        &mut self,
        _: &mut Window,
        _cx: &mut Context<Self>,
    ) -> impl IntoElement {
        v_flex()
            .size_full()
            .items_center()
            .justify_center()
            .child(self.calculator.clone())
    }
}

#[cfg(test)]
mod tests {
    use gpui::TestAppContext;
    use pretty_assertions::assert_eq;

    use super::*;

    #[gpui::test]
    fn window_hosts_calculator_view(cx: &mut TestAppContext) {
        cx.update(gpui_component::init);
        let window = cx.add_window(|_, cx| AppWindow::new(cx));

        window
            .update(cx, |app_window, _, cx| {
                let calculator = app_window.calculator().clone();
                calculator.update(cx, |view, _| {
                    for token in ["7", "*", "6", "="] {
                        view.press(token);
                    }
                });

                assert_eq!(calculator.read(cx).display().as_ref(), "42");
            })
            .unwrap();
    }
}
