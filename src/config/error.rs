use std::path::PathBuf;

/// Failures reading or writing the preferences file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `save` was called before `load` resolved a location.
    #[error("No preferences file location has been resolved")]
    FilePathNotSet,

    #[error("Could not determine the home directory")]
    HomeDirectoryNotFound,

    #[error("Could not read preferences from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    #[error("Could not write preferences to {path}: {source}")]
    SaveFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Could not create preferences directory {path}: {source}")]
    CreateDirectoryFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Could not encode preferences as YAML: {0}")]
    SerializationFailed(String),

    #[error("Preferences file is not valid YAML: {0}")]
    DeserializationFailed(String),
}
