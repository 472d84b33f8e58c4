//! # Configuration Module
//!
//! This module defines the runtime configuration of the bot: the two secrets
//! (Telegram bot token and TMDB API key) and the catalog tuning parameters.

use std::time::Duration;

// Constants for catalog configuration
pub const DEFAULT_TMDB_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_RESULT_COUNT: usize = 10;

/// Errors raised while reading configuration from the environment
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A required variable is unset or blank
    Missing(&'static str),
    /// A variable is set but cannot be parsed
    Invalid { name: &'static str, value: String },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Missing(name) => {
                write!(f, "Missing required environment variable {name}")
            }
            ConfigError::Invalid { name, value } => {
                write!(f, "Invalid value for {name}: {value:?}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Tuning parameters for the catalog pipeline
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Base URL of the TMDB v3 API (no trailing slash)
    pub api_base_url: String,
    /// Base URL poster paths are appended to
    pub image_base_url: String,
    /// Timeout applied to every catalog request
    pub request_timeout_secs: u64,
    /// Maximum number of movies shown per selection
    pub result_count: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_TMDB_BASE_URL.to_string(),
            image_base_url: DEFAULT_IMAGE_BASE_URL.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            result_count: DEFAULT_RESULT_COUNT,
        }
    }
}

impl CatalogConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Full bot configuration
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub bot_token: String,
    pub tmdb_api_key: String,
    pub catalog: CatalogConfig,
}

impl BotConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    ///
    /// Blank values are treated as unset so a placeholder `.env` entry
    /// fails the same way a missing one does.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let bot_token = get("TELEGRAM_BOT_TOKEN")
            .or_else(|| get("BOT_TOKEN"))
            .ok_or(ConfigError::Missing("TELEGRAM_BOT_TOKEN"))?;
        let tmdb_api_key = get("TMDB_API_KEY").ok_or(ConfigError::Missing("TMDB_API_KEY"))?;

        let mut catalog = CatalogConfig::default();
        if let Some(url) = get("TMDB_BASE_URL") {
            catalog.api_base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(url) = get("TMDB_IMAGE_BASE_URL") {
            catalog.image_base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(value) = get("TMDB_TIMEOUT_SECS") {
            catalog.request_timeout_secs = match value.parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    return Err(ConfigError::Invalid {
                        name: "TMDB_TIMEOUT_SECS",
                        value,
                    })
                }
            };
        }
        if let Some(value) = get("CATALOG_RESULT_COUNT") {
            let count = value.parse::<usize>().map_err(|_| ConfigError::Invalid {
                name: "CATALOG_RESULT_COUNT",
                value: value.clone(),
            })?;
            catalog.result_count = count.max(1);
        }

        Ok(Self {
            bot_token,
            tmdb_api_key,
            catalog,
        })
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
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_defaults_applied() {
        let config = BotConfig::from_lookup(lookup_from(&[
            ("TELEGRAM_BOT_TOKEN", "123:abc"),
            ("TMDB_API_KEY", "key"),
        ]))
        .unwrap();

        assert_eq!(config.bot_token, "123:abc");
        assert_eq!(config.tmdb_api_key, "key");
        assert_eq!(config.catalog.api_base_url, DEFAULT_TMDB_BASE_URL);
        assert_eq!(config.catalog.image_base_url, DEFAULT_IMAGE_BASE_URL);
        assert_eq!(config.catalog.request_timeout(), Duration::from_secs(10));
        assert_eq!(config.catalog.result_count, 10);
    }

    #[test]
    fn test_legacy_bot_token_name() {
        let config = BotConfig::from_lookup(lookup_from(&[
            ("BOT_TOKEN", "legacy"),
            ("TMDB_API_KEY", "key"),
        ]))
        .unwrap();
        assert_eq!(config.bot_token, "legacy");
    }

    #[test]
    fn test_missing_secrets_fail_fast() {
        let err = BotConfig::from_lookup(lookup_from(&[("TMDB_API_KEY", "key")])).unwrap_err();
        assert_eq!(err, ConfigError::Missing("TELEGRAM_BOT_TOKEN"));

        let err = BotConfig::from_lookup(lookup_from(&[
            ("TELEGRAM_BOT_TOKEN", "123:abc"),
            ("TMDB_API_KEY", "   "),
        ]))
        .unwrap_err();
        assert_eq!(err, ConfigError::Missing("TMDB_API_KEY"));
        assert!(err.to_string().contains("TMDB_API_KEY"));
    }

    #[test]
    fn test_overrides_and_validation() {
        let config = BotConfig::from_lookup(lookup_from(&[
            ("TELEGRAM_BOT_TOKEN", "t"),
            ("TMDB_API_KEY", "k"),
            ("TMDB_BASE_URL", "http://localhost:8080/3/"),
            ("TMDB_TIMEOUT_SECS", "3"),
            ("CATALOG_RESULT_COUNT", "0"),
        ]))
        .unwrap();
        assert_eq!(config.catalog.api_base_url, "http://localhost:8080/3");
        assert_eq!(config.catalog.request_timeout_secs, 3);
        assert_eq!(config.catalog.result_count, 1);

        let err = BotConfig::from_lookup(lookup_from(&[
            ("TELEGRAM_BOT_TOKEN", "t"),
            ("TMDB_API_KEY", "k"),
            ("TMDB_TIMEOUT_SECS", "soon"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "TMDB_TIMEOUT_SECS", .. }));
    }
}
