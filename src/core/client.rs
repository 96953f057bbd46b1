use async_trait::async_trait;
use serde::Serialize;
use serde_json::json;
use tracing::instrument;

use crate::core::config::Args;
use crate::core::error::{ConfigError, Error};
use crate::types::AuthResponse;
use crate::types::request::{Credentials, PasswordChange, PasswordReset, ProfileUpdate};
use crate::types::response::{Ack, FoundEmail, FoundEmails, Profile, VerificationCode};

/// The two calls the forms depend on. Implemented by [`Client`]; test
/// doubles implement it to keep submissions off the network.
#[async_trait]
pub trait AuthService {
    async fn signup(&self, credentials: &Credentials) -> Result<AuthResponse, Error>;
    async fn login(&self, credentials: &Credentials) -> Result<AuthResponse, Error>;
}

/// HTTP client for the backend's authentication endpoints. One request
/// per call, no caching, no retries; transport and status errors are
/// returned as-is.
#[derive(Clone, Debug)]
pub struct Client {
    client: reqwest::Client,
    url: String,
}

impl Client {
    /// # Errors
    /// Returns an error if the reqwest client cannot be built or
    /// `base_url` is not a valid URL.
    pub fn new(user_agent: &str, base_url: &str) -> Result<Self, ConfigError> {
        let client = reqwest::ClientBuilder::new().user_agent(user_agent).build()?;

        url::Url::parse(base_url)?;

        Ok(Self {
            client,
            url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// # Errors
    /// Returns an error if the client cannot be built from `args`.
    pub fn from_args(args: &Args) -> Result<Self, ConfigError> {
        Self::new(&args.user_agent, &args.base_url)
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.url, path)
    }

    async fn post<T>(&self, path: &str, body: &T) -> Result<reqwest::Response, Error>
    where
        T: Serialize + ?Sized,
    {
        Ok(self
            .client
            .post(self.endpoint(path))
            .json(body)
            .send()
            .await?
            .error_for_status()?)
    }

    async fn get(&self, path: &str, query: &[(&str, &str)]) -> Result<reqwest::Response, Error> {
        Ok(self
            .client
            .get(self.endpoint(path))
            .query(query)
            .send()
            .await?
            .error_for_status()?)
    }

    #[instrument(skip_all)]
    pub async fn change_password(&self, change: &PasswordChange) -> Result<Ack, Error> {
        Ok(self.post("change-password", change).await?.json().await?)
    }

    #[instrument(skip_all)]
    pub async fn find_email(&self, name: &str) -> Result<FoundEmail, Error> {
        Ok(self.get("find-email", &[("name", name)]).await?.json().await?)
    }

    #[instrument(skip_all)]
    pub async fn find_emails(&self, name: &str, phone: &str) -> Result<FoundEmails, Error> {
        Ok(self
            .get("find-emails", &[("name", name), ("phone", phone)])
            .await?
            .json()
            .await?)
    }

    #[instrument(skip_all)]
    pub async fn send_verification_code(&self, email: &str) -> Result<VerificationCode, Error> {
        let payload = json!({ "email": email });

        Ok(self
            .post("send-verification-code", &payload)
            .await?
            .json()
            .await?)
    }

    #[instrument(skip_all)]
    pub async fn reset_password(&self, reset: &PasswordReset) -> Result<Ack, Error> {
        Ok(self.post("reset-password", reset).await?.json().await?)
    }

    #[instrument(skip_all)]
    pub async fn user_info(&self, email: &str) -> Result<Profile, Error> {
        Ok(self.get("user-info", &[("email", email)]).await?.json().await?)
    }

    #[instrument(skip_all)]
    pub async fn update_user_info(&self, profile: &ProfileUpdate) -> Result<Ack, Error> {
        Ok(self
            .client
            .put(self.endpoint("user-info"))
            .json(profile)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?)
    }
}

#[async_trait]
impl AuthService for Client {
    #[instrument(skip_all)]
    async fn signup(&self, credentials: &Credentials) -> Result<AuthResponse, Error> {
        Ok(self.post("signup", credentials).await?.json().await?)
    }

    #[instrument(skip_all)]
    async fn login(&self, credentials: &Credentials) -> Result<AuthResponse, Error> {
        Ok(self.post("login", credentials).await?.json().await?)
    }
}
