use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use gpui::{App, Application};
use tracing::{debug, error};

use calc_ui::{
    components::WindowPreferences, config::CalcConfig, headless, logging, open_main_window,
    setup_app,
};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Desktop keypad calculator.
///
/// Opens the calculator window, or with `--keys` evaluates a key sequence
/// without a window and prints the resulting display.
#[derive(Debug, Parser)]
#[command(name = "calc", version, about)]
struct Cli {
    /// TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log filter, overriding the configuration (e.g. `debug`, `calc_core=trace`).
    #[arg(long)]
    log_level: Option<String>,

    /// Whitespace-separated keys to press headlessly, e.g. "3 + 4 + 5 =".
    #[arg(long)]
    keys: Option<String>,
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::init_default_logging();

    let mut config = CalcConfig::load_or_default(cli.config.as_deref())?;
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }

    if let Some(keys) = cli.keys {
        // stdout carries the result; keep log records out of it.
        config.logging.stdout = false;
        logging::apply_config(&config.logging).context("cannot configure logging")?;
        println!("{}", headless::run_keys(&keys));
        return Ok(());
    }

    logging::apply_config(&config.logging).context("cannot configure logging")?;
    debug!(?config, "starting calculator window");

    let preferences = WindowPreferences::from(&config.window);
    Application::new().run(move |cx: &mut App| {
        setup_app(cx);
        if let Err(error) = open_main_window(preferences, cx) {
            error!(?error, "cannot open calculator window");
            cx.quit();
        }
    });

    Ok(())
}
