pub mod bridge;
pub mod core;
pub mod forms;
pub mod types;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

pub use crate::core::client::{AuthService, Client};
pub use crate::core::config::Args;
pub use crate::core::error::{ConfigError, Error};
pub use crate::forms::login::LoginForm;
pub use crate::forms::signup::SignupForm;
pub use crate::types::AuthResponse;
pub use crate::types::request::Credentials;

/// Install the global tracing subscriber. Call once from the embedding
/// application, typically with [`Args::log_level`].
pub fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_new(log_level).unwrap_or_default())
        .with(tracing_subscriber::fmt::layer())
        .init();
}
