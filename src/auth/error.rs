//! Authentication-specific error types.

/// Errors raised while submitting the authentication form.
///
/// Validation errors are recovered locally by showing them in the form;
/// `RequestFailed` is what an authentication service reports back.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// A required field was left blank
    #[error("Please fill out the {field} field")]
    MissingField { field: &'static str },

    /// Sign-up password and confirmation differ
    #[error("Passwords do not match")]
    PasswordMismatch,

    /// Sign-up password is shorter than the minimum
    #[error("Password must be at least 8 characters long")]
    PasswordTooShort,

    /// The authentication service rejected or failed the request
    #[error("Authentication request failed: {reason}")]
    RequestFailed { reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_error_display() {
        let error = AuthError::MissingField { field: "email" };
        assert_eq!(error.to_string(), "Please fill out the email field");

        let error = AuthError::PasswordMismatch;
        assert_eq!(error.to_string(), "Passwords do not match");

        let error = AuthError::PasswordTooShort;
        assert_eq!(
            error.to_string(),
            "Password must be at least 8 characters long"
        );
    }

    #[test]
    fn test_auth_error_request_failed() {
        let error = AuthError::RequestFailed {
            reason: "invalid credentials".to_string(),
        };
        let error_str = error.to_string();
        assert!(error_str.contains("request failed"));
        assert!(error_str.contains("invalid credentials"));
    }
}
