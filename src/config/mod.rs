use std::str::FromStr;
use std::time::Duration;

use crate::errors::{NewsError, NewsResult};
use crate::services::{DEFAULT_MAX_CONCURRENCY, DEFAULT_WINDOW_SECS};
use crate::sources::DEFAULT_ITEMS_PER_SOURCE;
use crate::translate::{cache, google};

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub cache_ttl_secs: i64,
    pub max_concurrency: usize,
    pub items_per_source: usize,
    pub fetch_timeout: Duration,
    pub target_language: String,
    pub translate: bool,
    pub translate_url: String,
    pub translation_cache_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            cache_ttl_secs: DEFAULT_WINDOW_SECS,
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
            items_per_source: DEFAULT_ITEMS_PER_SOURCE,
            fetch_timeout: Duration::from_secs(10),
            target_language: "tr".to_string(),
            translate: true,
            translate_url: google::DEFAULT_ENDPOINT.to_string(),
            translation_cache_size: cache::DEFAULT_CAPACITY,
        }
    }
}

impl Config {
    /// Get the directory where the executable is located
    fn exe_dir() -> Option<std::path::PathBuf> {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
    }

    pub fn from_env() -> NewsResult<Self> {
        // Try to load .env from executable's directory first
        if let Some(dir) = Self::exe_dir() {
            let env_path = dir.join(".env");
            if env_path.exists() {
                dotenvy::from_path(&env_path).ok();
            }
        }
        // Fall back to current directory
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset keys keep their defaults
    pub fn from_lookup<F>(lookup: F) -> NewsResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let config = Self {
            host: lookup("NEWSROOM_HOST").unwrap_or(defaults.host),
            port: parse_var(&lookup, "NEWSROOM_PORT", defaults.port)?,
            cache_ttl_secs: parse_var(&lookup, "NEWSROOM_CACHE_TTL_SECS", defaults.cache_ttl_secs)?,
            max_concurrency: parse_var(&lookup, "NEWSROOM_MAX_CONCURRENCY", defaults.max_concurrency)?,
            items_per_source: parse_var(&lookup, "NEWSROOM_ITEMS_PER_SOURCE", defaults.items_per_source)?,
            fetch_timeout: Duration::from_secs(parse_var(
                &lookup,
                "NEWSROOM_FETCH_TIMEOUT_SECS",
                defaults.fetch_timeout.as_secs(),
            )?),
            target_language: lookup("NEWSROOM_TARGET_LANGUAGE").unwrap_or(defaults.target_language),
            translate: parse_bool(&lookup, "NEWSROOM_TRANSLATE", defaults.translate)?,
            translate_url: lookup("NEWSROOM_TRANSLATE_URL").unwrap_or(defaults.translate_url),
            translation_cache_size: parse_var(
                &lookup,
                "NEWSROOM_TRANSLATION_CACHE_SIZE",
                defaults.translation_cache_size,
            )?,
        };

        config.validate()?;
        Ok(config)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    fn validate(&self) -> NewsResult<()> {
        if self.max_concurrency == 0 {
            return Err(NewsError::Config(
                "NEWSROOM_MAX_CONCURRENCY must be at least 1".to_string(),
            ));
        }
        if self.items_per_source == 0 {
            return Err(NewsError::Config(
                "NEWSROOM_ITEMS_PER_SOURCE must be at least 1".to_string(),
            ));
        }
        if self.cache_ttl_secs < 0 {
            return Err(NewsError::Config(
                "NEWSROOM_CACHE_TTL_SECS cannot be negative".to_string(),
            ));
        }
        if self.target_language.trim().is_empty() {
            return Err(NewsError::Config(
                "NEWSROOM_TARGET_LANGUAGE cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

fn parse_var<F, T>(lookup: &F, name: &str, default: T) -> NewsResult<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name) {
        Some(value) => value.trim().parse().map_err(|_| NewsError::InvalidEnvVar {
            name: name.to_string(),
            value,
        }),
        None => Ok(default),
    }
}

fn parse_bool<F>(lookup: &F, name: &str, default: bool) -> NewsResult<bool>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(value) => match value.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => Err(NewsError::InvalidEnvVar {
                name: name.to_string(),
                value,
            }),
        },
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> NewsResult<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config.bind_addr(), "127.0.0.1:5000");
        assert_eq!(config.cache_ttl_secs, 300);
        assert_eq!(config.max_concurrency, 5);
        assert_eq!(config.items_per_source, 5);
        assert_eq!(config.fetch_timeout, Duration::from_secs(10));
        assert_eq!(config.target_language, "tr");
        assert!(config.translate);
        assert_eq!(config.translation_cache_size, 1000);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("NEWSROOM_PORT", "8080"),
            ("NEWSROOM_CACHE_TTL_SECS", "60"),
            ("NEWSROOM_TARGET_LANGUAGE", "en"),
            ("NEWSROOM_TRANSLATE", "off"),
        ])
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.cache_ttl_secs, 60);
        assert_eq!(config.target_language, "en");
        assert!(!config.translate);
    }

    #[test]
    fn test_invalid_number() {
        let err = config_from(&[("NEWSROOM_PORT", "eighty")]).unwrap_err();
        assert!(matches!(err, NewsError::InvalidEnvVar { ref name, .. } if name == "NEWSROOM_PORT"));
    }

    #[test]
    fn test_invalid_bool() {
        assert!(config_from(&[("NEWSROOM_TRANSLATE", "maybe")]).is_err());
    }

    #[test]
    fn test_zero_concurrency_rejected() {
        let err = config_from(&[("NEWSROOM_MAX_CONCURRENCY", "0")]).unwrap_err();
        assert!(matches!(err, NewsError::Config(_)));
    }
}
