//! Configuration for foiadraft.
//!
//! Everything comes from the environment (with `.env` support at startup).
//! There is no config file and no on-disk state.

use thiserror::Error;
use url::Url;

/// Default MuckRock API v2 endpoint.
pub const DEFAULT_API_URL: &str = "https://www.muckrock.com/api_v2";

/// Errors raised while loading settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Please set {0} as an environment variable.")]
    MissingVar(&'static str),

    #[error("Invalid {name}: {source}")]
    InvalidUrl {
        name: &'static str,
        #[source]
        source: url::ParseError,
    },
}

/// Application settings.
#[derive(Debug, Clone)]
pub struct Settings {
    /// MuckRock account username.
    pub username: String,
    /// MuckRock account password.
    pub password: String,
    /// MuckRock API v2 base URL.
    pub api_url: Url,
    /// User agent for HTTP requests.
    pub user_agent: String,
    /// Request timeout in seconds.
    pub request_timeout: u64,
}

/// Load settings from the environment.
///
/// `MUCKROCK_USERNAME` and `MUCKROCK_PASSWORD` are required; either one
/// missing is a fatal startup error. Optional overrides: `MUCKROCK_API_URL`,
/// `FOIADRAFT_USER_AGENT`, `FOIADRAFT_TIMEOUT_SECS`.
pub fn load_settings() -> Result<Settings, ConfigError> {
    let username = require_var("MUCKROCK_USERNAME")?;
    let password = require_var("MUCKROCK_PASSWORD")?;

    let api_url = std::env::var("MUCKROCK_API_URL")
        .ok()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string());
    let api_url = Url::parse(&api_url).map_err(|source| ConfigError::InvalidUrl {
        name: "MUCKROCK_API_URL",
        source,
    })?;

    let user_agent = std::env::var("FOIADRAFT_USER_AGENT")
        .ok()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "foiadraft/0.3 (public records research)".to_string());

    let request_timeout = std::env::var("FOIADRAFT_TIMEOUT_SECS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(30);

    Ok(Settings {
        username,
        password,
        api_url,
        user_agent,
        request_timeout,
    })
}

fn require_var(name: &'static str) -> Result<String, ConfigError> {
    std::env::var(name)
        .ok()
        .filter(|s| !s.is_empty())
        .ok_or(ConfigError::MissingVar(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_var_message() {
        let err = ConfigError::MissingVar("MUCKROCK_USERNAME");
        assert_eq!(
            err.to_string(),
            "Please set MUCKROCK_USERNAME as an environment variable."
        );
    }

    #[test]
    fn test_default_api_url_parses() {
        let url = Url::parse(DEFAULT_API_URL).unwrap();
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_str(), Some("www.muckrock.com"));
    }
}
