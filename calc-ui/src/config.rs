//! User configuration loaded from a TOML file.
//!
//! Every field has a default, so a missing or empty file is a valid
//! configuration.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Error returned when configuration text is not valid TOML for [`CalcConfig`].
#[derive(Debug, Error)]
#[error("invalid calculator configuration: {0}")]
pub struct ConfigError(#[from] toml::de::Error);

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalcConfig {
    pub window: WindowConfig,
    pub logging: LoggingConfig,
}

/// Initial window size in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 320.0,
            height: 480.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Bare level or full `EnvFilter` directive.
    pub level: String,
    /// Whether log records are echoed to stdout.
    pub stdout: bool,
    /// Log file to append to, if any.
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            stdout: true,
            file: None,
        }
    }
}

impl CalcConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Reads and parses the configuration file at `path`.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("cannot read config file '{}'", path.display()))?;
        let config = Self::from_toml_str(&text)
            .with_context(|| format!("cannot parse config file '{}'", path.display()))?;
        debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Loads `path` when given, otherwise returns the defaults.
    pub fn load_or_default(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_text_gives_defaults() {
        let config = CalcConfig::from_toml_str("").unwrap();

        assert_eq!(config, CalcConfig::default());
    }

    #[test]
    fn parses_all_sections() {
        let text = r#"
            [window]
            width = 400.0
            height = 600.0

            [logging]
            level = "debug"
            stdout = false
            file = "/tmp/calc.log"
        "#;

        let config = CalcConfig::from_toml_str(text).unwrap();

        assert_eq!(
            config,
            CalcConfig {
                window: WindowConfig {
                    width: 400.0,
                    height: 600.0
                },
                logging: LoggingConfig {
                    level: "debug".to_string(),
                    stdout: false,
                    file: Some(PathBuf::from("/tmp/calc.log")),
                },
            }
        );
    }

    #[test]
    fn partial_sections_keep_remaining_defaults() {
        let config = CalcConfig::from_toml_str("[window]\nwidth = 280.0\n").unwrap();

        assert_eq!(config.window.width, 280.0);
        assert_eq!(config.window.height, 480.0);
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn invalid_value_is_an_error() {
        let result = CalcConfig::from_toml_str("[window]\nwidth = \"wide\"\n");

        assert!(result.is_err());
    }

    #[test]
    fn load_reports_missing_file() {
        let error = CalcConfig::load(Path::new("/nonexistent/calc.toml")).unwrap_err();

        assert!(error.to_string().contains("/nonexistent/calc.toml"));
    }

    #[test]
    fn load_or_default_without_path() {
        let config = CalcConfig::load_or_default(None).unwrap();

        assert_eq!(config, CalcConfig::default());
    }
}
