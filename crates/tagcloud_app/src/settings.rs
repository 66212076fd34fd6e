//! Optional RON settings file overriding the built-in defaults.
//!
//! Absence of the file is the normal case; an unreadable or unparsable file
//! is logged and the defaults are used.

use std::fs;
use std::path::Path;

use cloud_logging::cloud_warn;
use serde::Deserialize;
use tagcloud_core::{DEFAULT_MAX_SIZE, DEFAULT_MIN_SIZE, DEFAULT_SEPARATORS};
use tagcloud_engine::{PageMode, DEFAULT_STYLESHEET_URL};

pub const SETTINGS_FILENAME: &str = "tagcloud.ron";

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Characters that delimit words.
    pub separators: String,
    pub min_size: u32,
    pub max_size: u32,
    pub mode: OutputMode,
    /// Stylesheet reference for the page head; `None` omits the link.
    pub stylesheet: Option<String>,
    /// Also write `{output}.summary.json` beside the page.
    pub write_summary: bool,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
pub enum OutputMode {
    #[default]
    Cloud,
    Report,
}

impl From<OutputMode> for PageMode {
    fn from(mode: OutputMode) -> Self {
        match mode {
            OutputMode::Cloud => PageMode::Cloud,
            OutputMode::Report => PageMode::Report,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            separators: DEFAULT_SEPARATORS.to_string(),
            min_size: DEFAULT_MIN_SIZE,
            max_size: DEFAULT_MAX_SIZE,
            mode: OutputMode::Cloud,
            stylesheet: Some(DEFAULT_STYLESHEET_URL.to_string()),
            write_summary: false,
        }
    }
}

/// Loads `tagcloud.ron` from `dir`, falling back to defaults.
pub fn load_settings(dir: &Path) -> Settings {
    let path = dir.join(SETTINGS_FILENAME);
    let content = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Settings::default();
        }
        Err(err) => {
            cloud_warn!("Failed to read settings from {:?}: {}", path, err);
            return Settings::default();
        }
    };

    match ron::from_str(&content) {
        Ok(settings) => settings,
        Err(err) => {
            cloud_warn!("Failed to parse settings from {:?}: {}", path, err);
            Settings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_settings_fill_in_defaults() {
        let settings: Settings =
            ron::from_str("(mode: Report, write_summary: true)").unwrap();

        assert_eq!(settings.mode, OutputMode::Report);
        assert!(settings.write_summary);
        assert_eq!(settings.separators, DEFAULT_SEPARATORS);
        assert_eq!(settings.min_size, DEFAULT_MIN_SIZE);
        assert_eq!(settings.max_size, DEFAULT_MAX_SIZE);
    }

    #[test]
    fn stylesheet_can_be_disabled() {
        let settings: Settings = ron::from_str("(stylesheet: None)").unwrap();

        assert_eq!(settings.stylesheet, None);
    }

    #[test]
    fn defaults_match_the_historical_report() {
        let settings = Settings::default();

        assert_eq!(settings.separators, " \t\n\r,-.!?[]';:/()");
        assert_eq!(settings.min_size, 11);
        assert_eq!(settings.max_size, 48);
        assert_eq!(settings.mode, OutputMode::Cloud);
    }
}
