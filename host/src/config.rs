//! Environment configuration for the host.

use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "https://to-do-app-backend-g3j9.onrender.com";

/// Store base URL.
pub const BASE_URL_VAR: &str = "TODO_API_URL";
/// Optional whole-request timeout in seconds. Unset means no timeout.
pub const TIMEOUT_VAR: &str = "TODO_API_TIMEOUT_SECS";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("TODO_API_TIMEOUT_SECS must be a whole number of seconds, got {0:?}")]
    InvalidTimeout(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
    pub timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let base_url = lookup(BASE_URL_VAR)
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let timeout = match lookup(TIMEOUT_VAR) {
            Some(raw) => {
                let secs = raw
                    .trim()
                    .parse::<u64>()
                    .map_err(|_| ConfigError::InvalidTimeout(raw.clone()))?;
                Some(Duration::from_secs(secs))
            }
            None => None,
        };
        Ok(Self { base_url, timeout })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn reads_url_and_timeout() {
        let config = Config::from_lookup(|key| match key {
            BASE_URL_VAR => Some("http://127.0.0.1:3000/".to_string()),
            TIMEOUT_VAR => Some("5".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.base_url, "http://127.0.0.1:3000/");
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
    }

    #[test]
    fn blank_url_falls_back_to_default() {
        let config = Config::from_lookup(|key| (key == BASE_URL_VAR).then(|| "  ".to_string())).unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn rejects_bad_timeout() {
        let err = Config::from_lookup(|key| (key == TIMEOUT_VAR).then(|| "soon".to_string())).unwrap_err();
        assert_eq!(err, ConfigError::InvalidTimeout("soon".to_string()));
    }
}
