use std::env;
use std::time::Duration;

use crate::shared::domain::UserId;
use crate::shared::errors::{AppError, AppResult};

pub const DEFAULT_BASE_URL: &str = "https://one8-again-backend.onrender.com/api";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for the activity service
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub user_agent: String,
    /// Default acting user for a bootstrapped session, if one is configured
    pub user_id: Option<UserId>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: default_user_agent(),
            user_id: None,
        }
    }
}

fn default_user_agent() -> String {
    format!("One8-Client/{}", env!("CARGO_PKG_VERSION"))
}

impl ClientConfig {
    /// Load from the process environment (after `.env`, if present)
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let base_url = match lookup("ONE8_API_BASE_URL") {
            Some(raw) => Self::validate_base_url(&raw)?,
            None => defaults.base_url,
        };

        let timeout = match lookup("ONE8_API_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw.trim().parse().map_err(|e| {
                    AppError::ConfigError(format!("ONE8_API_TIMEOUT_SECS '{}': {}", raw, e))
                })?;
                if secs == 0 {
                    return Err(AppError::ConfigError(
                        "ONE8_API_TIMEOUT_SECS must be greater than zero".to_string(),
                    ));
                }
                Duration::from_secs(secs)
            }
            None => defaults.timeout,
        };

        let user_agent = lookup("ONE8_USER_AGENT")
            .map(|ua| ua.trim().to_string())
            .filter(|ua| !ua.is_empty())
            .unwrap_or(defaults.user_agent);

        let user_id = match lookup("ONE8_USER_ID") {
            Some(raw) if !raw.trim().is_empty() => {
                let id: UserId = raw.trim().parse().map_err(|e| {
                    AppError::ConfigError(format!("ONE8_USER_ID '{}': {}", raw, e))
                })?;
                Some(id)
            }
            _ => None,
        };

        Ok(Self {
            base_url,
            timeout,
            user_agent,
            user_id,
        })
    }

    fn validate_base_url(raw: &str) -> AppResult<String> {
        let trimmed = raw.trim().trim_end_matches('/');
        if !trimmed.starts_with("http://") && !trimmed.starts_with("https://") {
            return Err(AppError::ConfigError(format!(
                "ONE8_API_BASE_URL must start with http:// or https://, got '{}'",
                raw
            )));
        }
        Ok(trimmed.to_string())
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = ClientConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(config.user_agent.starts_with("One8-Client/"));
    }

    #[test]
    fn test_reads_all_values() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            ("ONE8_API_BASE_URL", "http://localhost:8000/api/"),
            ("ONE8_API_TIMEOUT_SECS", "5"),
            ("ONE8_USER_AGENT", "kiosk"),
            ("ONE8_USER_ID", "12"),
        ]))
        .unwrap();

        assert_eq!(config.base_url, "http://localhost:8000/api");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.user_agent, "kiosk");
        assert_eq!(config.user_id, Some(12));
    }

    #[test]
    fn test_rejects_invalid_values() {
        let bad_url = ClientConfig::from_lookup(lookup_from(&[("ONE8_API_BASE_URL", "ftp://x")]));
        assert!(matches!(bad_url, Err(AppError::ConfigError(_))));

        let zero_timeout =
            ClientConfig::from_lookup(lookup_from(&[("ONE8_API_TIMEOUT_SECS", "0")]));
        assert!(matches!(zero_timeout, Err(AppError::ConfigError(_))));

        let bad_user = ClientConfig::from_lookup(lookup_from(&[("ONE8_USER_ID", "me")]));
        assert!(matches!(bad_user, Err(AppError::ConfigError(_))));
    }
}
