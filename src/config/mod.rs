//! Preferences file.
//!
//! The only persisted preference is the theme flag, kept as YAML in
//! `~/.config/sweet/config.yml` unless another directory is given.

mod error;

pub use error::ConfigError;

use crate::error::AppError;
use crate::state::ThemeStorage;
use log::*;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

const FILE_NAME: &str = "config.yml";
const DEFAULT_DIRECTORY_PATH: &str = ".config/sweet";

/// In-memory preferences plus the file they were read from.
///
#[derive(Clone, Debug, Default)]
pub struct Config {
    pub theme: Option<String>,
    file_path: Option<PathBuf>,
}

/// On-disk layout.
///
#[derive(Serialize, Deserialize, Default)]
struct FileSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    theme: Option<String>,
}

impl Config {
    pub fn new() -> Config {
        Config::default()
    }

    /// Resolve the preferences directory, creating it if needed, and read
    /// the file if one exists. A missing file is written on the first save.
    /// Nothing here stops startup: an unreadable or malformed file leaves the
    /// theme unset and the next save overwrites it.
    ///
    pub fn load(&mut self, custom_path: Option<&str>) {
        let dir_path = match custom_path {
            Some(path) => PathBuf::from(path),
            None => match Config::default_path() {
                Ok(path) => path,
                Err(e) => {
                    warn!("{}, preferences will not be saved", e);
                    return;
                }
            },
        };
        if let Err(e) = ensure_dir(&dir_path) {
            warn!("{}", e);
        }

        let file_path = dir_path.join(FILE_NAME);
        if file_path.exists() {
            match read_spec(&file_path) {
                Ok(spec) => {
                    self.theme = spec.theme;
                    debug!("Loaded preferences from {}", file_path.display());
                }
                Err(e) => warn!("{}, using defaults", e),
            }
        }
        self.file_path = Some(file_path);
    }

    /// Write the current preferences to the resolved file.
    ///
    pub fn save(&self) -> Result<(), AppError> {
        let file_path = self.file_path.as_ref().ok_or(ConfigError::FilePathNotSet)?;
        let spec = FileSpec {
            theme: self.theme.clone(),
        };
        let content = serde_yaml::to_string(&spec)
            .map_err(|e| ConfigError::SerializationFailed(e.to_string()))?;
        if let Some(parent) = file_path.parent() {
            ensure_dir(parent)?;
        }

        let save_failed = |source| ConfigError::SaveFailed {
            path: file_path.clone(),
            source,
        };
        let mut file = fs::File::create(file_path).map_err(save_failed)?;
        file.write_all(content.as_bytes()).map_err(save_failed)?;
        file.flush().map_err(save_failed)?;
        Ok(())
    }

    fn default_path() -> Result<PathBuf, AppError> {
        let home = dirs::home_dir().ok_or(ConfigError::HomeDirectoryNotFound)?;
        Ok(home.join(DEFAULT_DIRECTORY_PATH))
    }
}

fn ensure_dir(path: &Path) -> Result<(), ConfigError> {
    if path.exists() {
        return Ok(());
    }
    fs::create_dir_all(path).map_err(|source| ConfigError::CreateDirectoryFailed {
        path: path.to_path_buf(),
        source,
    })
}

fn read_spec(path: &Path) -> Result<FileSpec, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    // An empty document deserializes as null, not as an empty mapping
    if contents.trim().is_empty() {
        return Ok(FileSpec::default());
    }
    serde_yaml::from_str(&contents).map_err(|e| ConfigError::DeserializationFailed(e.to_string()))
}

impl ThemeStorage for Config {
    fn load_theme(&self) -> Option<String> {
        self.theme.clone()
    }

    fn save_theme(&mut self, value: &str) -> Result<(), AppError> {
        self.theme = Some(value.to_string());
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ThemeStore;
    use tempfile::TempDir;

    fn load_from(dir: &TempDir) -> Config {
        let mut config = Config::new();
        config.load(dir.path().to_str());
        config
    }

    #[test]
    fn load_missing_file_leaves_theme_unset() {
        let dir = TempDir::new().unwrap();
        let config = load_from(&dir);
        assert!(config.load_theme().is_none());
        assert!(!dir.path().join(FILE_NAME).exists());
    }

    #[test]
    fn load_creates_directory() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("nested/sweet");
        let mut config = Config::new();
        config.load(nested.to_str());
        assert!(nested.is_dir());
    }

    #[test]
    fn save_theme_round_trips() {
        let dir = TempDir::new().unwrap();
        let mut config = load_from(&dir);
        config.save_theme("light").unwrap();

        let contents = fs::read_to_string(dir.path().join(FILE_NAME)).unwrap();
        assert!(contents.contains("theme: light"));

        let reloaded = load_from(&dir);
        assert_eq!(reloaded.load_theme().as_deref(), Some("light"));
    }

    #[test]
    fn load_existing_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(FILE_NAME), "theme: dark\n").unwrap();
        let config = load_from(&dir);
        assert_eq!(config.theme.as_deref(), Some("dark"));
    }

    #[test]
    fn load_empty_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(FILE_NAME), "").unwrap();
        let config = load_from(&dir);
        assert!(config.theme.is_none());
    }

    #[test]
    fn load_malformed_file_falls_back_to_dark() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(FILE_NAME), "theme: [unclosed").unwrap();
        let mut config = load_from(&dir);
        assert!(config.load_theme().is_none());
        assert!(ThemeStore::new(Box::new(config.clone())).is_dark());

        // The next toggle replaces the broken file
        config.save_theme("light").unwrap();
        let reloaded = load_from(&dir);
        assert_eq!(reloaded.load_theme().as_deref(), Some("light"));
    }

    #[test]
    fn load_unreadable_file_leaves_theme_unset() {
        let dir = TempDir::new().unwrap();
        // A directory where the file should be cannot be read as text
        fs::create_dir(dir.path().join(FILE_NAME)).unwrap();
        let config = load_from(&dir);
        assert!(config.load_theme().is_none());
        assert_eq!(config.file_path, Some(dir.path().join(FILE_NAME)));
    }

    #[test]
    fn save_without_path_fails() {
        let mut config = Config::new();
        let error = config.save_theme("dark").unwrap_err();
        assert!(matches!(error, AppError::Config(ConfigError::FilePathNotSet)));
        assert_eq!(config.load_theme().as_deref(), Some("dark"));
    }
}
