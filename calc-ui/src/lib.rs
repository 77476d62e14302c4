pub mod components;
pub mod config;
pub mod gui;
pub mod headless;
pub mod keypad;
pub mod logging;

use gpui::{App, actions};
pub use gui::{open_main_window, setup_app};
use tracing::info;

actions!(calculator, [Quit]);

// Bound to the quit shortcut and the application menu.
pub fn quit(
    _: &Quit,
    cx: &mut App,
) {
    info!("Executing quit handler");
    cx.quit();
}
