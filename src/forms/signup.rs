use crate::core::client::AuthService;
use crate::core::error::Error;
use crate::forms::MISSING_FIELDS;
use crate::types::AuthResponse;
use crate::types::request::Credentials;

pub const SIGNUP_FAILED: &str = "signup failed";
pub const PASSWORD_MISMATCH: &str = "passwords do not match";

/// Transient signup form state. The confirmation password never leaves
/// the form; only `{email, password}` is sent.
#[derive(Debug, Default)]
pub struct SignupForm {
    email: String,
    password: String,
    confirm_password: String,
    error: Option<&'static str>,
    last_failure: Option<Error>,
}

impl SignupForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
    }

    pub fn set_confirm_password(&mut self, confirm_password: impl Into<String>) {
        self.confirm_password = confirm_password.into();
    }

    /// The user-facing message from the last submission, if it failed.
    pub fn error(&self) -> Option<&'static str> {
        self.error
    }

    /// The error behind the last failed request. Never shown to the
    /// user; kept for callers that want more than the fixed message.
    pub fn last_failure(&self) -> Option<&Error> {
        self.last_failure.as_ref()
    }

    /// Submit the form. A password mismatch or empty field aborts
    /// locally without touching the service; otherwise one signup call
    /// is issued and the body is handed to `on_success` unchanged.
    pub async fn submit<S, F>(&mut self, service: &S, on_success: F)
    where
        S: AuthService + Sync,
        F: FnOnce(AuthResponse),
    {
        self.error = None;
        self.last_failure = None;

        if self.password != self.confirm_password {
            self.error = Some(PASSWORD_MISMATCH);
            return;
        }

        if self.email.is_empty() || self.password.is_empty() {
            self.error = Some(MISSING_FIELDS);
            return;
        }

        let credentials = Credentials {
            email: self.email.clone(),
            password: self.password.clone(),
        };

        match service.signup(&credentials).await {
            Ok(body) => on_success(body),
            Err(e) => {
                tracing::error!("signup failed: {}", e);
                self.error = Some(SIGNUP_FAILED);
                self.last_failure = Some(e);
            }
        }
    }
}
