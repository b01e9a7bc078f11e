// src/config/config_load.rs
//
// loading of config.toml

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::Level;

use super::{LoggingConfig, StyleConfig, WindowConfig};
use crate::error::{LadderError, LadderResult};

pub const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    pub style: StyleConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Look next to the executable first, then in the working directory.
    pub fn locate() -> Option<PathBuf> {
        Self::exe_dir_path()
            .filter(|path| path.exists())
            .or_else(|| Some(PathBuf::from(CONFIG_FILE)).filter(|path| path.exists()))
    }

    fn exe_dir_path() -> Option<PathBuf> {
        let exe_path = std::env::current_exe().ok()?;
        Some(exe_path.parent()?.join(CONFIG_FILE))
    }

    pub fn load_from_path(path: &Path) -> LadderResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> LadderResult<Self> {
        let config: Config = toml::from_str(content)?;
        config.log_level()?;
        Ok(config)
    }

    pub fn log_level(&self) -> LadderResult<Level> {
        Level::from_str(self.logging.level.trim())
            .map_err(|_| LadderError::InvalidLogLevel(self.logging.level.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::Color;

    #[test]
    fn test_parse_full_config() {
        let config = Config::from_toml_str(
            r##"
            [window]
            title = "ladder"
            width = 800
            height = 600
            fullscreen = true

            [style]
            background = "#000000"
            stroke = "#fff"

            [logging]
            level = "debug"
            "##,
        )
        .unwrap();

        assert_eq!(config.window.title, "ladder");
        assert_eq!((config.window.width, config.window.height), (800, 600));
        assert!(config.window.fullscreen);
        assert_eq!(config.style.background, Color::BLACK);
        assert_eq!(config.style.stroke, Color::new(255, 255, 255));
        assert_eq!(config.log_level().unwrap(), Level::DEBUG);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = Config::from_toml_str("[window]\nwidth = 320\n").unwrap();
        assert_eq!(config.window.width, 320);
        assert_eq!(config.window.height, 768);
        assert_eq!(config.style, StyleConfig::default());
        assert_eq!(config.log_level().unwrap(), Level::INFO);
    }

    #[test]
    fn test_bad_color_rejected() {
        let result = Config::from_toml_str("[style]\nstroke = \"blue\"\n");
        assert!(matches!(result, Err(LadderError::Config(_))));
    }

    #[test]
    fn test_bad_log_level_rejected() {
        let result = Config::from_toml_str("[logging]\nlevel = \"loud\"\n");
        assert!(matches!(result, Err(LadderError::InvalidLogLevel(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = Config::load_from_path(Path::new("/nonexistent/ladderline/config.toml"));
        assert!(matches!(result, Err(LadderError::Io(_))));
    }
}
