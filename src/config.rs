use crate::error::{ExplorerError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const APP_NAME: &str = "folio";

/// Application configuration
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    pub panel: PanelConfig,
    pub ui: UiConfig,
    pub favorites: FavoritesConfig,
    pub logging: LoggingConfig,
}

/// Window sizes (in pixels)
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    /// Initial size of folder windows
    pub folder_width: f32,
    pub folder_height: f32,
}

/// Panel layout configuration
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct PanelConfig {
    /// Width of the favorites/tree column (in pixels)
    pub side_width: f32,
}

/// UI behavior configuration
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct UiConfig {
    /// Show hidden files by default
    pub show_hidden: bool,
    /// Folder shown in the list at startup; home directory when unset
    pub start_path: Option<PathBuf>,
    /// Root of the directory tree; filesystem root when unset
    pub tree_root: Option<PathBuf>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct FavoritesConfig {
    /// Favorites file; `favorites.json` in the data directory when unset
    pub file: Option<PathBuf>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter, e.g. "info" or "folio=debug". RUST_LOG wins when set.
    pub level: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            width: 800.0,
            height: 600.0,
            folder_width: 400.0,
            folder_height: 400.0,
        }
    }
}

impl Default for PanelConfig {
    fn default() -> Self {
        PanelConfig { side_width: 200.0 }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: "info".to_string(),
        }
    }
}

fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("", "", APP_NAME)
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Directory for favorites and logs
    pub fn data_dir() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.data_dir().to_path_buf())
    }

    /// Favorites file, honoring the override
    pub fn favorites_path(&self) -> PathBuf {
        self.favorites
            .file
            .clone()
            .or_else(|| Self::data_dir().map(|dir| dir.join("favorites.json")))
            .unwrap_or_else(|| PathBuf::from("favorites.json"))
    }

    /// Load configuration from file, or return defaults if file doesn't exist
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Config::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }
        Self::parse(&fs::read_to_string(path)?)
    }

    pub fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path().ok_or(ExplorerError::ConfigDirUnavailable)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Create a default config file if it doesn't exist
    pub fn create_default() -> Result<()> {
        if let Some(path) = Self::config_path() {
            if !path.exists() {
                Config::default().save()?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.window.width, 800.0);
        assert_eq!(config.window.folder_height, 400.0);
        assert_eq!(config.panel.side_width, 200.0);
        assert_eq!(config.logging.level, "info");
        assert!(!config.ui.show_hidden);
        assert!(config.ui.start_path.is_none());
    }

    #[test]
    fn test_config_serialization() {
        let mut config = Config::default();
        config.ui.start_path = Some(PathBuf::from("/srv"));
        let toml_str = toml::to_string(&config).expect("Failed to serialize");
        let deserialized = Config::parse(&toml_str).expect("Failed to deserialize");
        assert_eq!(deserialized.ui.start_path, Some(PathBuf::from("/srv")));
        assert_eq!(deserialized.panel.side_width, config.panel.side_width);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config = Config::parse("[ui]\nshow_hidden = true\n").unwrap();
        assert!(config.ui.show_hidden);
        assert_eq!(config.window.height, 600.0);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_bad_config_is_error() {
        assert!(matches!(
            Config::parse("[window]\nwidth = \"wide\"\n"),
            Err(ExplorerError::ConfigParse(_))
        ));
    }

    #[test]
    fn test_load_from_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_load_from_broken_file_reports_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[window\nwidth = 1").unwrap();
        assert!(matches!(
            Config::load_from(&path),
            Err(ExplorerError::ConfigParse(_))
        ));
    }

    #[test]
    fn test_favorites_override() {
        let mut config = Config::default();
        config.favorites.file = Some(PathBuf::from("/tmp/favs.json"));
        assert_eq!(config.favorites_path(), PathBuf::from("/tmp/favs.json"));
    }
}
