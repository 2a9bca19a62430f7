//! Authentication service seam.
//!
//! The form dispatches an [`AuthRequest`] through the network event channel;
//! the network handler hands it to an [`AuthService`]. No real backend exists
//! yet, so the application runs with [`StubAuthService`], which logs the
//! attempt and reports success.

mod error;

pub use error::AuthError;

use crate::state::AuthMode;
use log::*;
use std::fmt;

/// Request produced by a successful form submission.
///
#[derive(Clone, PartialEq, Eq)]
pub enum AuthRequest {
    Login {
        email: String,
        password: String,
    },
    SignUp {
        full_name: String,
        email: String,
        password: String,
    },
    PasswordReset {
        email: String,
    },
}

impl AuthRequest {
    /// Return the form mode that produced this request.
    ///
    pub fn mode(&self) -> AuthMode {
        match self {
            AuthRequest::Login { .. } => AuthMode::Login,
            AuthRequest::SignUp { .. } => AuthMode::Signup,
            AuthRequest::PasswordReset { .. } => AuthMode::ForgotPassword,
        }
    }
}

// Passwords never reach the log.
impl fmt::Debug for AuthRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthRequest::Login { email, .. } => f
                .debug_struct("Login")
                .field("email", email)
                .field("password", &"<redacted>")
                .finish(),
            AuthRequest::SignUp {
                full_name, email, ..
            } => f
                .debug_struct("SignUp")
                .field("full_name", full_name)
                .field("email", email)
                .field("password", &"<redacted>")
                .finish(),
            AuthRequest::PasswordReset { email } => f
                .debug_struct("PasswordReset")
                .field("email", email)
                .finish(),
        }
    }
}

/// Accepts credentials and answers with success or a failure reason.
///
#[allow(async_fn_in_trait)]
pub trait AuthService {
    async fn login(&self, email: &str, password: &str) -> Result<(), AuthError>;

    async fn sign_up(&self, full_name: &str, email: &str, password: &str)
        -> Result<(), AuthError>;

    async fn request_password_reset(&self, email: &str) -> Result<(), AuthError>;

    /// Route a request to the matching operation.
    ///
    async fn send(&self, request: &AuthRequest) -> Result<(), AuthError> {
        match request {
            AuthRequest::Login { email, password } => self.login(email, password).await,
            AuthRequest::SignUp {
                full_name,
                email,
                password,
            } => self.sign_up(full_name, email, password).await,
            AuthRequest::PasswordReset { email } => self.request_password_reset(email).await,
        }
    }
}

/// Service used until a real backend exists. Every call succeeds.
///
#[derive(Debug, Default)]
pub struct StubAuthService;

impl AuthService for StubAuthService {
    async fn login(&self, email: &str, _password: &str) -> Result<(), AuthError> {
        info!("Login attempt with email {}", email);
        Ok(())
    }

    async fn sign_up(
        &self,
        full_name: &str,
        email: &str,
        _password: &str,
    ) -> Result<(), AuthError> {
        info!("Signup attempt for {} <{}>", full_name, email);
        Ok(())
    }

    async fn request_password_reset(&self, email: &str) -> Result<(), AuthError> {
        info!("Password reset requested for {}", email);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::faker::internet::en::SafeEmail;
    use fake::faker::name::en::Name;
    use fake::Fake;

    #[test]
    fn mode() {
        let email: String = SafeEmail().fake();
        let request = AuthRequest::PasswordReset { email };
        assert_eq!(request.mode(), AuthMode::ForgotPassword);
        let request = AuthRequest::Login {
            email: String::new(),
            password: String::new(),
        };
        assert_eq!(request.mode(), AuthMode::Login);
    }

    #[test]
    fn debug_redacts_password() {
        let request = AuthRequest::SignUp {
            full_name: Name().fake(),
            email: SafeEmail().fake(),
            password: "hunter2hunter2".to_string(),
        };
        let output = format!("{:?}", request);
        assert!(output.contains("<redacted>"));
        assert!(!output.contains("hunter2hunter2"));
    }

    #[tokio::test]
    async fn stub_accepts_every_request() {
        let service = StubAuthService;
        let email: String = SafeEmail().fake();
        let requests = [
            AuthRequest::Login {
                email: email.clone(),
                password: "password123".to_string(),
            },
            AuthRequest::SignUp {
                full_name: Name().fake(),
                email: email.clone(),
                password: "password123".to_string(),
            },
            AuthRequest::PasswordReset { email },
        ];
        for request in &requests {
            assert_eq!(service.send(request).await, Ok(()));
        }
    }
}
