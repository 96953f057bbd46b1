use crate::core::client::AuthService;
use crate::core::error::Error;
use crate::forms::MISSING_FIELDS;
use crate::types::AuthResponse;
use crate::types::request::Credentials;

pub const LOGIN_FAILED: &str = "login failed";

/// Transient login form state. Rendering and post-login navigation
/// belong to the embedding UI; this type owns the fields and the
/// submission flow.
#[derive(Debug, Default)]
pub struct LoginForm {
    email: String,
    password: String,
    error: Option<&'static str>,
    last_failure: Option<Error>,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
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

    /// Submit the form: validate locally, then issue one login call.
    /// On success the response body is handed to `on_success` unchanged;
    /// on failure the form records [`LOGIN_FAILED`] and stays ready for
    /// resubmission.
    pub async fn submit<S, F>(&mut self, service: &S, on_success: F)
    where
        S: AuthService + Sync,
        F: FnOnce(AuthResponse),
    {
        self.error = None;
        self.last_failure = None;

        if self.email.is_empty() || self.password.is_empty() {
            self.error = Some(MISSING_FIELDS);
            return;
        }

        let credentials = Credentials {
            email: self.email.clone(),
            password: self.password.clone(),
        };

        match service.login(&credentials).await {
            Ok(body) => on_success(body),
            Err(e) => {
                tracing::error!("login failed: {}", e);
                self.error = Some(LOGIN_FAILED);
                self.last_failure = Some(e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Mutex;

    #[derive(Default)]
    struct StubService {
        calls: Mutex<Vec<Credentials>>,
        fail: bool,
    }

    #[async_trait]
    impl AuthService for StubService {
        async fn signup(&self, _credentials: &Credentials) -> Result<AuthResponse, Error> {
            unreachable!("login form never signs up")
        }

        async fn login(&self, credentials: &Credentials) -> Result<AuthResponse, Error> {
            self.calls.lock().unwrap().push(credentials.clone());

            if self.fail {
                Err(Error::Internal)
            } else {
                Ok(json!({ "token": "t1" }))
            }
        }
    }

    fn filled_form() -> LoginForm {
        let mut form = LoginForm::new();
        form.set_email("a@b.com");
        form.set_password("x");
        form
    }

    #[tokio::test]
    async fn submit_hands_payload_to_success_handler() {
        let service = StubService::default();
        let mut form = filled_form();

        let mut received = None;
        form.submit(&service, |body| received = Some(body)).await;

        assert_eq!(received, Some(json!({ "token": "t1" })));
        assert_eq!(form.error(), None);
        assert!(form.last_failure().is_none());

        let calls = service.calls.lock().unwrap();
        assert_eq!(
            calls.as_slice(),
            [Credentials {
                email: "a@b.com".to_string(),
                password: "x".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn failure_sets_fixed_message_and_keeps_detail() {
        let service = StubService {
            fail: true,
            ..StubService::default()
        };
        let mut form = filled_form();

        let mut received = None;
        form.submit(&service, |body| received = Some(body)).await;

        assert_eq!(received, None);
        assert_eq!(form.error(), Some(LOGIN_FAILED));
        assert!(matches!(form.last_failure(), Some(Error::Internal)));
    }

    #[tokio::test]
    async fn empty_fields_never_reach_the_service() {
        let service = StubService::default();
        let mut form = LoginForm::new();
        form.set_email("a@b.com");

        form.submit(&service, |_| {}).await;

        assert_eq!(form.error(), Some(MISSING_FIELDS));
        assert!(service.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn resubmission_clears_the_previous_error() {
        let failing = StubService {
            fail: true,
            ..StubService::default()
        };
        let mut form = filled_form();

        form.submit(&failing, |_| {}).await;
        assert_eq!(form.error(), Some(LOGIN_FAILED));

        let working = StubService::default();
        form.submit(&working, |_| {}).await;

        assert_eq!(form.error(), None);
        assert!(form.last_failure().is_none());
    }
}
