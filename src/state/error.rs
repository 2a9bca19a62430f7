//! State management-specific error types.

/// Errors that can occur during state operations.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    /// No view is addressed by the path
    #[error("No view at path '{path}'")]
    UnknownRoute { path: String },

    /// The network event channel is closed
    #[error("Network thread is not running")]
    NetworkUnavailable,
}
