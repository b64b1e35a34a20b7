//! Client configuration sourced from the process environment.

use std::sync::Arc;

/// Environment variable consulted by [`ClientConfig::from_environment`].
pub const SERVER_URL_ENV: &str = "OCTAVO_SERVER_URL";

/// Default catalog endpoint used when no override is present.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:4730";

/// Runtime configuration for the Octavo client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    server_url: Arc<str>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SERVER_URL)
    }
}

impl ClientConfig {
    pub fn new(server_url: impl Into<String>) -> Self {
        Self {
            server_url: Arc::from(server_url.into()),
        }
    }

    /// Read configuration from the environment, falling back to defaults.
    ///
    /// A malformed URL is kept (the gateway will surface transport errors)
    /// but logged so misconfiguration is visible early.
    pub fn from_environment() -> Self {
        let server_url = std::env::var(SERVER_URL_ENV)
            .unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string());
        let config = Self::new(server_url);
        if let Err(error) = url::Url::parse(config.server_url()) {
            log::warn!(
                "[Config] Server URL {:?} is not a valid URL: {error}",
                config.server_url()
            );
        }
        config
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    pub fn with_server_url(mut self, server_url: impl Into<String>) -> Self {
        self.server_url = Arc::from(server_url.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_catalog() {
        let config = ClientConfig::default();
        assert_eq!(config.server_url(), DEFAULT_SERVER_URL);
    }

    #[test]
    fn with_server_url_replaces_the_endpoint() {
        let config = ClientConfig::default()
            .with_server_url("http://catalog.internal:8080");
        assert_eq!(config.server_url(), "http://catalog.internal:8080");
    }

    #[test]
    fn environment_override_replaces_the_default() {
        // No other test touches this variable.
        unsafe { std::env::set_var(SERVER_URL_ENV, "http://catalog.test:9000") };
        let config = ClientConfig::from_environment();
        unsafe { std::env::remove_var(SERVER_URL_ENV) };
        assert_eq!(config.server_url(), "http://catalog.test:9000");
    }
}
