use gpui::{
    App, AppContext, Bounds, KeyBinding, Menu, MenuItem, TitlebarOptions, WindowBounds,
    WindowOptions,
};
use tracing::info;

use crate::{
    Quit,
    components::{AppWindow, WindowPreferences},
    quit,
};

pub const WINDOW_TITLE: &str = "Calculator";

pub fn setup_app(app_cx: &mut App) {
    // This must be called before using any GPUI Component features.
    gpui_component::init(app_cx);

    app_cx.activate(true);

    #[cfg(target_os = "macos")]
    app_cx.bind_keys([KeyBinding::new("cmd-q", Quit, None)]);

    #[cfg(not(target_os = "macos"))]
    app_cx.bind_keys([
        KeyBinding::new("ctrl-q", Quit, None),
        KeyBinding::new("alt-F4", Quit, None),
    ]);

    app_cx.on_action(quit);

    app_cx.set_menus(vec![Menu {
        name: WINDOW_TITLE.into(),
        items: vec![MenuItem::action("Quit", Quit)],
    }]);
}

/// Opens the single calculator window, centered on the main display.
pub fn open_main_window(
    preferences: WindowPreferences,
    app_cx: &mut App,
) -> anyhow::Result<()> {
    let bounds = Bounds::centered(None, preferences.size, app_cx);
    let options = WindowOptions {
        window_bounds: Some(WindowBounds::Windowed(bounds)),
        titlebar: Some(TitlebarOptions {
            title: Some(WINDOW_TITLE.into()),
            ..Default::default()
        }),
        ..Default::default()
    };

    app_cx.open_window(options, |_window, cx| cx.new(AppWindow::new))?;

    info!(width = ?preferences.size.width, height = ?preferences.size.height, "calculator window opened");
    Ok(())
}
