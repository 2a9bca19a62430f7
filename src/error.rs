//! Top-level error type.
//!
//! Module errors convert into `AppError` so setup code can use `?` across
//! module boundaries; `main` reports whatever reaches it through `anyhow`.

pub use crate::config::ConfigError;
pub use crate::state::StateError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Preferences: {0}")]
    Config(#[from] ConfigError),

    #[error("Navigation: {0}")]
    State(#[from] StateError),

    #[error("Terminal I/O: {0}")]
    Io(#[from] std::io::Error),

    /// A global logger was already installed.
    #[error("Logger: {0}")]
    Logger(String),

    #[error("Network runtime: {0}")]
    RuntimeCreation(String),
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_module_errors() {
        let error: AppError = ConfigError::HomeDirectoryNotFound.into();
        assert!(matches!(error, AppError::Config(ConfigError::HomeDirectoryNotFound)));
        assert_eq!(
            error.to_string(),
            "Preferences: Could not determine the home directory"
        );

        let error: AppError = StateError::UnknownRoute {
            path: "/projects".to_string(),
        }
        .into();
        assert!(error.to_string().starts_with("Navigation: "));
        assert!(error.to_string().contains("/projects"));
    }

    #[test]
    fn wraps_io_errors() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "stdout closed");
        let error: AppError = io.into();
        assert_eq!(error.to_string(), "Terminal I/O: stdout closed");
    }
}
