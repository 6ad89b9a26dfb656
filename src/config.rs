use crate::errors::{AppError, Result};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Maximum transitions kept in the debug log
pub const MAX_HISTORY: usize = 50;

/// Application configuration loaded from file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Screen behaviour
    #[serde(default)]
    pub ui: UiConfig,
}

/// UI-specific configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Capture the mouse so buttons can be clicked and dialogs dismissed
    /// by clicking outside them
    #[serde(default = "default_true")]
    pub mouse: bool,

    /// Show key hints in the footer
    #[serde(default = "default_true")]
    pub hints: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            mouse: default_true(),
            hints: default_true(),
        }
    }
}

fn default_true() -> bool {
    true
}

impl AppConfig {
    /// Load configuration from `path`, or the default path when `None`
    pub fn load(path: Option<&Path>) -> Self {
        match path {
            Some(path) => Self::load_from_path(path),
            None => Self::load_from_path(&Self::default_path()),
        }
    }

    /// Get the default configuration path
    pub fn default_path() -> PathBuf {
        directories::BaseDirs::new().map_or_else(
            || PathBuf::from("~/.config/botones-alerta/config.toml"),
            |dirs| dirs.config_dir().join("botones-alerta").join("config.toml"),
        )
    }

    /// Load configuration from a specific path, falling back to defaults
    pub fn load_from_path(path: &Path) -> Self {
        match Self::try_load_from_path(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("{}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Load configuration from a specific path
    ///
    /// A missing file is not an error and yields the defaults.
    pub fn try_load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("Config file not found at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|source| AppError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&content).map_err(|source| AppError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// Generate example configuration file content
    pub fn example() -> String {
        r#"# botones-alerta configuration
# Place this file at ~/.config/botones-alerta/config.toml

[ui]
# Click buttons with the mouse; clicking outside a dialog closes it
mouse = true

# Show key hints in the footer
hints = true
"#
        .to_string()
    }
}

/// Screen palette; button accents follow the Material colours of each dialog kind
pub mod colors {
    use super::Color;

    pub const BG: Color = Color::Rgb(26, 27, 38); // #1a1b26
    pub const FG: Color = Color::Rgb(192, 202, 245); // #c0caf5
    pub const PRIMARY: Color = Color::Rgb(122, 162, 247); // #7aa2f7 status text
    pub const BORDER: Color = Color::Rgb(59, 66, 97); // #3b4261
    pub const HIGHLIGHT: Color = Color::Rgb(187, 154, 247); // #bb9af7 focus
    pub const MUTED: Color = Color::Rgb(86, 95, 137); // #565f89 hints
    pub const BUTTON_FG: Color = Color::White;

    pub const GREEN: Color = Color::Rgb(76, 175, 80); // #4caf50
    pub const RED: Color = Color::Rgb(244, 67, 54); // #f44336
    pub const BLUE: Color = Color::Rgb(33, 150, 243); // #2196f3
    pub const ORANGE: Color = Color::Rgb(255, 152, 0); // #ff9800
    pub const PURPLE: Color = Color::Rgb(156, 39, 176); // #9c27b0
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::try_load_from_path(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
        assert!(config.ui.mouse);
        assert!(config.ui.hints);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[ui]\nmouse = false").unwrap();

        let config = AppConfig::try_load_from_path(file.path()).unwrap();
        assert!(!config.ui.mouse);
        assert!(config.ui.hints);
    }

    #[test]
    fn test_invalid_file_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[ui]\nmouse = \"sometimes\"").unwrap();

        let err = AppConfig::try_load_from_path(file.path()).unwrap_err();
        assert!(matches!(err, AppError::ConfigParse { .. }));
        assert!(err.to_string().starts_with("Invalid config"));

        // Lenient loader falls back instead of failing
        assert_eq!(AppConfig::load_from_path(file.path()), AppConfig::default());
    }

    #[test]
    fn test_example_parses_to_defaults() {
        let config: AppConfig = toml::from_str(&AppConfig::example()).unwrap();
        assert_eq!(config, AppConfig::default());
    }
}
