//! Runtime configuration for the NWS client.

use crate::constants::{NWS_API_BASE, USER_AGENT};

/// Environment variable overriding the API base URL
pub const ENV_API_BASE: &str = "NWS_API_BASE";

/// Environment variable overriding the `User-Agent` header
pub const ENV_USER_AGENT: &str = "NWS_USER_AGENT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherConfig {
    /// Origin every relative request path is resolved against
    pub base_url: String,
    /// Sent on every request; api.weather.gov asks for a product name and contact
    pub user_agent: String,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: NWS_API_BASE.to_string(),
            user_agent: USER_AGENT.to_string(),
        }
    }
}

impl WeatherConfig {
    /// Builds the configuration from the defaults, overridden by any non-empty
    /// `NWS_API_BASE` / `NWS_USER_AGENT` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        Self {
            base_url: non_empty(ENV_API_BASE).unwrap_or(defaults.base_url),
            user_agent: non_empty(ENV_USER_AGENT).unwrap_or(defaults.user_agent),
        }
    }

    /// Points the client at another origin, e.g. a mock server in tests
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}
