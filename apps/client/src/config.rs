//! Client configuration loading from environment variables.
//!
//! Everything is read once at startup. A `.env` file in the working directory
//! is honored through `dotenvy` before this runs.
//!
//! # Environment Variables
//!
//! ## Required Variables
//! - `API_BASE_URL`: Base URL of the content API
//! - `USER_ID`: Identifier of the signed-in user
//! - `UPLOAD_BASE_URL`: Base URL of the media hosting service
//! - `UPLOAD_PRESET`: Unsigned upload preset used for media uploads
//!
//! ## Optional Variables
//! - `RUST_LOG`: Logging level (default: "info,client=debug")
//! - `API_TOKEN`: Bearer token sent with every API request
//! - `USER_DISPLAY_NAME`: Name shown on optimistic comments
//! - `USER_AVATAR_URL`: Avatar shown on optimistic comments
//! - `REQUEST_TIMEOUT_SECONDS`: HTTP timeout (default: 30)
//! - `NAME_ELLIPSIS_LENGTH`: Author names longer than this are shortened (default: 20)

use crate::domain::shared::session::SessionContext;
use serde::Deserialize;
use std::time::Duration;

/// Complete client configuration loaded from environment.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Content API base URL (e.g., `https://api.example.com/api`)
    pub api_base_url: String,

    /// Bearer token for the content API
    pub api_token: Option<String>,

    pub user_id: String,
    pub user_display_name: Option<String>,
    pub user_avatar_url: Option<String>,

    /// Media host base URL; `/{image|video}/upload` is appended per upload
    pub upload_base_url: String,

    pub upload_preset: String,

    pub request_timeout_seconds: u64,

    pub name_ellipsis_length: usize,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if any required environment variable is missing or
    /// cannot be parsed to the expected type.
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            api_base_url: env_required("API_BASE_URL")?,
            api_token: std::env::var("API_TOKEN").ok(),
            user_id: env_required("USER_ID")?,
            user_display_name: std::env::var("USER_DISPLAY_NAME").ok(),
            user_avatar_url: std::env::var("USER_AVATAR_URL").ok(),
            upload_base_url: env_required("UPLOAD_BASE_URL")?,
            upload_preset: env_required("UPLOAD_PRESET")?,
            request_timeout_seconds: env_or("REQUEST_TIMEOUT_SECONDS", 30)?,
            name_ellipsis_length: env_or("NAME_ELLIPSIS_LENGTH", 20)?,
        })
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }

    /// The signed-in user as seen by the use cases.
    pub fn session(&self) -> SessionContext {
        SessionContext::new(self.user_id.as_str())
            .with_profile(self.user_display_name.clone(), self.user_avatar_url.clone())
            .with_token(self.api_token.clone())
    }
}

/// Load a required environment variable.
///
/// # Errors
///
/// Returns an error if the variable is not set.
fn env_required(key: &str) -> anyhow::Result<String> {
    std::env::var(key).map_err(|_| anyhow::anyhow!("Missing required environment variable: {}", key))
}

/// Load an environment variable, falling back to `default` when unset.
fn env_or<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(val) => val
            .parse::<T>()
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", key, e)),
        Err(_) => Ok(default),
    }
}
