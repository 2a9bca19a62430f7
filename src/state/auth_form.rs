//! Authentication modal form state.
//!
//! One field record is shared by all three modes so values typed in one mode
//! survive a switch to another. Only the fields of the active mode are
//! validated and submitted.

use crate::auth::{AuthError, AuthRequest};

const MIN_PASSWORD_LENGTH: usize = 8;

pub const RESET_SENT_MESSAGE: &str = "Password reset instructions sent to your email";

/// Specifying the modal's form modes.
///
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum AuthMode {
    #[default]
    Login,
    Signup,
    ForgotPassword,
}

impl AuthMode {
    /// Fields shown and submitted in this mode, in focus order.
    ///
    pub fn fields(self) -> &'static [FormField] {
        match self {
            AuthMode::Login => &[FormField::Email, FormField::Password],
            AuthMode::Signup => &[
                FormField::FullName,
                FormField::Email,
                FormField::Password,
                FormField::ConfirmPassword,
            ],
            AuthMode::ForgotPassword => &[FormField::Email],
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            AuthMode::Login => "Login",
            AuthMode::Signup => "Sign Up",
            AuthMode::ForgotPassword => "Forgot Password",
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            AuthMode::Login => "Login",
            AuthMode::Signup => "Sign Up",
            AuthMode::ForgotPassword => "Reset Password",
        }
    }

    /// Message shown when the service rejects a request from this mode.
    ///
    pub fn failure_message(self) -> &'static str {
        match self {
            AuthMode::Login => "Invalid email or password",
            AuthMode::Signup => "Error creating account. Please try again.",
            AuthMode::ForgotPassword => "Error sending reset instructions. Please try again.",
        }
    }
}

/// Specifying the form's input fields.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FormField {
    FullName,
    Email,
    Password,
    ConfirmPassword,
}

impl FormField {
    pub fn placeholder(self) -> &'static str {
        match self {
            FormField::FullName => "Full Name",
            FormField::Email => "Email",
            FormField::Password => "Password",
            FormField::ConfirmPassword => "Confirm Password",
        }
    }

    pub fn is_secret(self) -> bool {
        matches!(self, FormField::Password | FormField::ConfirmPassword)
    }
}

/// Field values shared across modes.
///
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct FormFields {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl FormFields {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::FullName => &self.full_name,
            FormField::Email => &self.email,
            FormField::Password => &self.password,
            FormField::ConfirmPassword => &self.confirm_password,
        }
    }

    fn get_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::FullName => &mut self.full_name,
            FormField::Email => &mut self.email,
            FormField::Password => &mut self.password,
            FormField::ConfirmPassword => &mut self.confirm_password,
        }
    }
}

/// Whether the message slot holds an error or a confirmation.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum MessageKind {
    Error,
    Info,
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct FormMessage {
    pub text: String,
    pub kind: MessageKind,
}

impl FormMessage {
    pub fn error(text: impl Into<String>) -> Self {
        FormMessage {
            text: text.into(),
            kind: MessageKind::Error,
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        FormMessage {
            text: text.into(),
            kind: MessageKind::Info,
        }
    }
}

/// What the modal should do once a request completes.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum AuthOutcome {
    Close,
    Stay,
}

/// State of an open authentication modal.
///
#[derive(Debug, Default, Clone)]
pub struct AuthForm {
    mode: AuthMode,
    fields: FormFields,
    message: Option<FormMessage>,
    focus_index: usize,
    pending: bool,
}

impl AuthForm {
    /// Return a fresh form in the requested mode.
    ///
    pub fn open(mode: AuthMode) -> Self {
        AuthForm {
            mode,
            ..AuthForm::default()
        }
    }

    pub fn mode(&self) -> AuthMode {
        self.mode
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn message(&self) -> Option<&FormMessage> {
        self.message.as_ref()
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn focused_field(&self) -> FormField {
        let fields = self.mode.fields();
        fields[self.focus_index.min(fields.len() - 1)]
    }

    /// Switch to another mode, keeping typed values and dropping any message.
    ///
    pub fn switch_mode(&mut self, mode: AuthMode) -> &mut Self {
        self.mode = mode;
        self.message = None;
        self.focus_index = 0;
        self
    }

    pub fn focus_next(&mut self) -> &mut Self {
        self.focus_index = (self.focus_index + 1) % self.mode.fields().len();
        self
    }

    pub fn focus_prev(&mut self) -> &mut Self {
        let len = self.mode.fields().len();
        self.focus_index = (self.focus_index + len - 1) % len;
        self
    }

    pub fn focus(&mut self, field: FormField) -> &mut Self {
        if let Some(index) = self.mode.fields().iter().position(|f| *f == field) {
            self.focus_index = index;
        }
        self
    }

    /// Append a character to the focused field.
    ///
    pub fn push_char(&mut self, c: char) -> &mut Self {
        let field = self.focused_field();
        self.fields.get_mut(field).push(c);
        self
    }

    /// Remove the last character of the focused field.
    ///
    pub fn pop_char(&mut self) -> &mut Self {
        let field = self.focused_field();
        self.fields.get_mut(field).pop();
        self
    }

    /// Check the active mode's fields and build the request they describe.
    ///
    pub fn validate(&self) -> Result<AuthRequest, AuthError> {
        let fields = &self.fields;
        match self.mode {
            AuthMode::Login => {
                require(&fields.email, "email")?;
                require(&fields.password, "password")?;
                Ok(AuthRequest::Login {
                    email: fields.email.trim().to_string(),
                    password: fields.password.clone(),
                })
            }
            AuthMode::Signup => {
                require(&fields.full_name, "full name")?;
                require(&fields.email, "email")?;
                if fields.password != fields.confirm_password {
                    return Err(AuthError::PasswordMismatch);
                }
                if fields.password.chars().count() < MIN_PASSWORD_LENGTH {
                    return Err(AuthError::PasswordTooShort);
                }
                Ok(AuthRequest::SignUp {
                    full_name: fields.full_name.trim().to_string(),
                    email: fields.email.trim().to_string(),
                    password: fields.password.clone(),
                })
            }
            AuthMode::ForgotPassword => {
                require(&fields.email, "email")?;
                Ok(AuthRequest::PasswordReset {
                    email: fields.email.trim().to_string(),
                })
            }
        }
    }

    /// Clear the message and validate. Returns the request to dispatch, or
    /// None if validation failed (the error is shown) or a request is
    /// already in flight.
    ///
    pub fn submit(&mut self) -> Option<AuthRequest> {
        if self.pending {
            return None;
        }
        self.message = None;
        match self.validate() {
            Ok(request) => {
                self.pending = true;
                Some(request)
            }
            Err(error) => {
                self.message = Some(FormMessage::error(error.to_string()));
                None
            }
        }
    }

    /// Apply the result of a request sent from `mode`. Fields are kept on
    /// failure so the user can retry. A result this form never asked for, or
    /// one for a mode the user has since switched away from, only releases
    /// the pending flag.
    ///
    pub fn complete(&mut self, mode: AuthMode, result: Result<(), AuthError>) -> AuthOutcome {
        let awaited = std::mem::replace(&mut self.pending, false);
        if !awaited || mode != self.mode {
            return AuthOutcome::Stay;
        }
        match (mode, result) {
            (AuthMode::ForgotPassword, Ok(())) => {
                self.message = Some(FormMessage::info(RESET_SENT_MESSAGE));
                AuthOutcome::Stay
            }
            (_, Ok(())) => AuthOutcome::Close,
            (mode, Err(_)) => {
                self.message = Some(FormMessage::error(mode.failure_message()));
                AuthOutcome::Stay
            }
        }
    }
}

fn require(value: &str, field: &'static str) -> Result<(), AuthError> {
    if value.trim().is_empty() {
        Err(AuthError::MissingField { field })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_into(form: &mut AuthForm, field: FormField, text: &str) {
        form.focus(field);
        for c in text.chars() {
            form.push_char(c);
        }
    }

    fn signup_form(password: &str, confirm_password: &str) -> AuthForm {
        let mut form = AuthForm::open(AuthMode::Signup);
        type_into(&mut form, FormField::FullName, "Agnes Varda");
        type_into(&mut form, FormField::Email, "agnes@example.com");
        type_into(&mut form, FormField::Password, password);
        type_into(&mut form, FormField::ConfirmPassword, confirm_password);
        form
    }

    fn message_text(form: &AuthForm) -> Option<&str> {
        form.message().map(|m| m.text.as_str())
    }

    #[test]
    fn open_defaults_to_login() {
        let form = AuthForm::default();
        assert_eq!(form.mode(), AuthMode::Login);
        assert_eq!(form.focused_field(), FormField::Email);
        assert!(form.message().is_none());
        assert!(!form.is_pending());
    }

    #[test]
    fn signup_short_password() {
        let mut form = signup_form("abc", "abc");
        assert!(form.submit().is_none());
        assert_eq!(
            message_text(&form),
            Some("Password must be at least 8 characters long")
        );
        assert!(!form.is_pending());
    }

    #[test]
    fn signup_mismatched_passwords() {
        let mut form = signup_form("abcdefgh", "xbcdefgh");
        assert!(form.submit().is_none());
        assert_eq!(message_text(&form), Some("Passwords do not match"));
    }

    #[test]
    fn signup_mismatch_checked_before_length() {
        let form = signup_form("abc", "xyz");
        assert_eq!(form.validate(), Err(AuthError::PasswordMismatch));
    }

    #[test]
    fn signup_requires_name_and_email() {
        let mut form = AuthForm::open(AuthMode::Signup);
        type_into(&mut form, FormField::Password, "abcdefgh");
        type_into(&mut form, FormField::ConfirmPassword, "abcdefgh");
        assert!(form.submit().is_none());
        assert_eq!(
            message_text(&form),
            Some("Please fill out the full name field")
        );

        type_into(&mut form, FormField::FullName, "Agnes Varda");
        assert_eq!(
            form.validate(),
            Err(AuthError::MissingField { field: "email" })
        );

        type_into(&mut form, FormField::Email, "agnes@example.com");
        assert!(form.submit().is_some());
    }

    #[test]
    fn signup_valid_submission_proceeds() {
        let mut form = signup_form("abcdefgh", "abcdefgh");
        let request = form.submit();
        assert_eq!(
            request,
            Some(AuthRequest::SignUp {
                full_name: "Agnes Varda".to_string(),
                email: "agnes@example.com".to_string(),
                password: "abcdefgh".to_string(),
            })
        );
        assert!(form.message().is_none());
        assert!(form.is_pending());
        assert_eq!(form.complete(AuthMode::Signup, Ok(())), AuthOutcome::Close);
    }

    #[test]
    fn login_requires_email_and_password() {
        let mut form = AuthForm::open(AuthMode::Login);
        assert!(form.submit().is_none());
        assert_eq!(message_text(&form), Some("Please fill out the email field"));

        type_into(&mut form, FormField::Email, "a@b.com");
        assert!(form.submit().is_none());
        assert_eq!(
            message_text(&form),
            Some("Please fill out the password field")
        );

        type_into(&mut form, FormField::Password, "secret");
        assert!(form.submit().is_some());
        assert!(form.message().is_none());
    }

    #[test]
    fn login_ignores_signup_fields() {
        let mut form = signup_form("abc", "different");
        form.switch_mode(AuthMode::Login);
        assert_eq!(
            form.validate(),
            Ok(AuthRequest::Login {
                email: "agnes@example.com".to_string(),
                password: "abc".to_string(),
            })
        );
    }

    #[test]
    fn login_success_closes() {
        let mut form = AuthForm::open(AuthMode::Login);
        type_into(&mut form, FormField::Email, "a@b.com");
        type_into(&mut form, FormField::Password, "secret");
        assert!(form.submit().is_some());
        assert_eq!(form.complete(AuthMode::Login, Ok(())), AuthOutcome::Close);
        assert!(!form.is_pending());
    }

    #[test]
    fn login_failure_keeps_form_populated() {
        let mut form = AuthForm::open(AuthMode::Login);
        type_into(&mut form, FormField::Email, "a@b.com");
        type_into(&mut form, FormField::Password, "secret");
        assert!(form.submit().is_some());
        let outcome = form.complete(
            AuthMode::Login,
            Err(AuthError::RequestFailed {
                reason: "rejected".to_string(),
            }),
        );
        assert_eq!(outcome, AuthOutcome::Stay);
        assert_eq!(message_text(&form), Some("Invalid email or password"));
        assert_eq!(form.message().map(|m| m.kind), Some(MessageKind::Error));
        assert_eq!(form.fields().email, "a@b.com");
        assert_eq!(form.fields().password, "secret");
    }

    #[test]
    fn stale_result_after_mode_switch_is_ignored() {
        let mut form = AuthForm::open(AuthMode::Login);
        type_into(&mut form, FormField::Email, "a@b.com");
        type_into(&mut form, FormField::Password, "secret");
        assert!(form.submit().is_some());
        form.switch_mode(AuthMode::Signup);
        assert_eq!(form.complete(AuthMode::Login, Ok(())), AuthOutcome::Stay);
        assert!(form.message().is_none());
        assert!(!form.is_pending());
    }

    #[test]
    fn result_without_submission_is_ignored() {
        let mut form = AuthForm::open(AuthMode::Login);
        let outcome = form.complete(
            AuthMode::Login,
            Err(AuthError::RequestFailed {
                reason: "rejected".to_string(),
            }),
        );
        assert_eq!(outcome, AuthOutcome::Stay);
        assert!(form.message().is_none());
        assert_eq!(form.complete(AuthMode::Login, Ok(())), AuthOutcome::Stay);
    }

    #[test]
    fn submit_ignored_while_pending() {
        let mut form = AuthForm::open(AuthMode::ForgotPassword);
        type_into(&mut form, FormField::Email, "a@b.com");
        assert!(form.submit().is_some());
        assert!(form.submit().is_none());
        assert!(form.message().is_none());
    }

    #[test]
    fn forgot_password_stays_open_with_info() {
        let mut form = AuthForm::open(AuthMode::ForgotPassword);
        type_into(&mut form, FormField::Email, "a@b.com");
        assert_eq!(
            form.submit(),
            Some(AuthRequest::PasswordReset {
                email: "a@b.com".to_string()
            })
        );
        let outcome = form.complete(AuthMode::ForgotPassword, Ok(()));
        assert_eq!(outcome, AuthOutcome::Stay);
        assert_eq!(
            message_text(&form),
            Some("Password reset instructions sent to your email")
        );
        assert_eq!(form.message().map(|m| m.kind), Some(MessageKind::Info));
    }

    #[test]
    fn switching_modes_preserves_fields_and_clears_message() {
        let mut form = AuthForm::open(AuthMode::Login);
        type_into(&mut form, FormField::Email, "a@b.com");
        assert!(form.submit().is_none());
        assert!(form.message().is_some());

        form.switch_mode(AuthMode::Signup);
        assert!(form.message().is_none());
        assert_eq!(form.fields().email, "a@b.com");

        assert!(form.submit().is_none());
        assert!(form.message().is_some());
        form.switch_mode(AuthMode::Login);
        assert!(form.message().is_none());
        assert_eq!(form.fields().email, "a@b.com");
    }

    #[test]
    fn typing_goes_to_focused_field() {
        let mut form = AuthForm::open(AuthMode::Signup);
        assert_eq!(form.focused_field(), FormField::FullName);
        form.push_char('A').focus_next().push_char('b');
        assert_eq!(form.fields().full_name, "A");
        assert_eq!(form.fields().email, "b");
        form.pop_char();
        assert_eq!(form.fields().email, "");
    }

    #[test]
    fn focus_wraps() {
        let mut form = AuthForm::open(AuthMode::Login);
        form.focus_prev();
        assert_eq!(form.focused_field(), FormField::Password);
        form.focus_next();
        assert_eq!(form.focused_field(), FormField::Email);
        form.switch_mode(AuthMode::ForgotPassword);
        form.focus_next();
        assert_eq!(form.focused_field(), FormField::Email);
    }

    #[test]
    fn focus_ignores_fields_outside_mode() {
        let mut form = AuthForm::open(AuthMode::Login);
        form.focus(FormField::Password);
        form.focus(FormField::FullName);
        assert_eq!(form.focused_field(), FormField::Password);
    }
}
