use config::Config;
use serde::Deserialize;

use crate::core::error::ConfigError;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api/auth";

const DEFAULT_USER_AGENT: &str = concat!("unified-auth/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Deserialize, Clone)]
pub struct Args {
    pub base_url: String,
    pub user_agent: String,
    pub log_level: String,
}

impl Args {
    /// Read settings from `UNIFIED_AUTH_*` environment variables,
    /// falling back to the defaults above.
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = Config::builder()
            .set_default("base_url", DEFAULT_BASE_URL)?
            .set_default("user_agent", DEFAULT_USER_AGENT)?
            .set_default("log_level", "info")?
            .add_source(config::Environment::with_prefix("UNIFIED_AUTH"))
            .build()?;

        Ok(config.try_deserialize::<Args>()?)
    }
}
