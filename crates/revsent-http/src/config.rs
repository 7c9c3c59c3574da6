//! Analysis server configuration

use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;
use url::Url;

use revsent_core::{Error, Result};

pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5004";

/// Where the analysis service lives and how long to wait for it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    pub base_url: Url,
    /// No client-side timeout when `None`; the transport decides when to give up
    pub timeout: Option<Duration>,
}

impl ServerConfig {
    /// Create configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let base_url = env::var("REVSENT_SERVER_URL")
            .unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string());

        let timeout = match env::var("REVSENT_TIMEOUT_SECS") {
            Ok(raw) => Some(parse_timeout(&raw)?),
            Err(_) => None,
        };

        Ok(Self {
            base_url: parse_base_url(&base_url)?,
            timeout,
        })
    }

    /// Create configuration with an explicit server URL
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self {
            base_url: parse_base_url(base_url)?,
            timeout: None,
        })
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Resolve an endpoint path against the base URL
    pub fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| Error::Configuration(format!("invalid endpoint '{}': {}", path, e)))
    }
}

/// Parse a server URL, forcing a trailing slash so relative joins keep any path prefix
pub fn parse_base_url(raw: &str) -> Result<Url> {
    let mut url = Url::parse(raw.trim())
        .map_err(|e| Error::Configuration(format!("invalid server URL '{}': {}", raw, e)))?;

    if url.cannot_be_a_base() {
        return Err(Error::Configuration(format!(
            "server URL '{}' cannot be used as a base",
            raw
        )));
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    Ok(url)
}

pub fn parse_timeout(raw: &str) -> Result<Duration> {
    raw.trim()
        .parse::<u64>()
        .map(Duration::from_secs)
        .map_err(|_| Error::Configuration(format!("invalid timeout '{}': expected seconds", raw)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_onto_base() {
        let config = ServerConfig::new("http://localhost:5004").unwrap();
        assert_eq!(
            config.endpoint("analyze").unwrap().as_str(),
            "http://localhost:5004/analyze"
        );
    }

    #[test]
    fn test_endpoint_keeps_path_prefix() {
        let config = ServerConfig::new("https://reviews.example.com/api").unwrap();
        assert_eq!(
            config.endpoint("status").unwrap().as_str(),
            "https://reviews.example.com/api/status"
        );
    }

    #[test]
    fn test_invalid_url_is_configuration_error() {
        let err = ServerConfig::new("not a url").unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn test_parse_timeout() {
        assert_eq!(parse_timeout("30").unwrap(), Duration::from_secs(30));
        assert!(parse_timeout("soon").is_err());
    }

    #[test]
    fn test_default_url_has_no_timeout() {
        let config = ServerConfig::new(DEFAULT_SERVER_URL).unwrap();
        assert_eq!(config.timeout, None);
        assert_eq!(config.base_url.as_str(), "http://127.0.0.1:5004/");
    }
}
