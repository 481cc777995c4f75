use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use interfaces_youtube_client::index::DEFAULT_BASE_URL;
use thiserror::Error;

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Owner of the categories and checkpoints in `user_data`.
    pub user: String,
    pub database: DatabaseConfig,
    pub youtube: YouTubeConfig,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub name: String,
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct YouTubeConfig {
    pub api_base_url: String,
    pub request_timeout: Duration,
    pub client_secrets_file: PathBuf,
    pub token_storage_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            log_level: "info".to_string(),
            user: "default".to_string(),
            database: DatabaseConfig {
                name: "mytube".to_string(),
                host: "127.0.0.1".to_string(),
                port: 5432,
                username: String::new(),
                password: String::new(),
            },
            youtube: YouTubeConfig {
                api_base_url: DEFAULT_BASE_URL.to_string(),
                request_timeout: Duration::from_secs(30),
                client_secrets_file: PathBuf::from("client_secrets.json"),
                token_storage_file: PathBuf::from("oauth2.json"),
            },
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("InvalidValue: {key}={value}")]
    InvalidValue { key: &'static str, value: String },
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from `lookup`, falling back to the defaults for
    /// anything it does not return.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(value) = lookup("MYTUBE_BIND_ADDR") {
            config.bind_addr = parse("MYTUBE_BIND_ADDR", value)?;
        }
        if let Some(value) = lookup("MYTUBE_LOG_LEVEL") {
            config.log_level = value;
        }
        if let Some(value) = lookup("MYTUBE_USER") {
            config.user = value;
        }

        if let Some(value) = lookup("MYTUBE_DATABASE") {
            config.database.name = value;
        }
        if let Some(value) = lookup("MYTUBE_DATABASE_HOST") {
            config.database.host = value;
        }
        if let Some(value) = lookup("MYTUBE_DATABASE_PORT") {
            config.database.port = parse("MYTUBE_DATABASE_PORT", value)?;
        }
        if let Some(value) = lookup("MYTUBE_DATABASE_USERNAME") {
            config.database.username = value;
        }
        if let Some(value) = lookup("MYTUBE_DATABASE_PASSWORD") {
            config.database.password = value;
        }

        if let Some(value) = lookup("YOUTUBE_API_BASE_URL") {
            config.youtube.api_base_url = value;
        }
        if let Some(value) = lookup("YOUTUBE_REQUEST_TIMEOUT_SECS") {
            config.youtube.request_timeout =
                Duration::from_secs(parse("YOUTUBE_REQUEST_TIMEOUT_SECS", value)?);
        }
        if let Some(value) = lookup("YOUTUBE_CLIENT_SECRETS_FILE") {
            config.youtube.client_secrets_file = PathBuf::from(value);
        }
        if let Some(value) = lookup("YOUTUBE_TOKEN_STORAGE_FILE") {
            config.youtube.token_storage_file = PathBuf::from(value);
        }

        Ok(config)
    }
}

fn parse<T: std::str::FromStr>(key: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .parse()
        .map_err(|_| ConfigError::InvalidValue { key, value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.database.name, "mytube");
        assert_eq!(config.database.port, 5432);
        assert_eq!(config.youtube.api_base_url, "https://www.googleapis.com");
        assert_eq!(config.youtube.token_storage_file, PathBuf::from("oauth2.json"));
    }

    #[test]
    fn overrides_are_applied() {
        let config = Config::from_lookup(lookup_from(&[
            ("MYTUBE_BIND_ADDR", "127.0.0.1:9000"),
            ("MYTUBE_USER", "kusinwolf"),
            ("MYTUBE_DATABASE_PORT", "6543"),
            ("YOUTUBE_REQUEST_TIMEOUT_SECS", "5"),
            ("YOUTUBE_TOKEN_STORAGE_FILE", "../oauth2.json"),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr, "127.0.0.1:9000".parse().unwrap());
        assert_eq!(config.user, "kusinwolf");
        assert_eq!(config.database.port, 6543);
        assert_eq!(config.youtube.request_timeout, Duration::from_secs(5));
        assert_eq!(config.youtube.token_storage_file, PathBuf::from("../oauth2.json"));
    }

    #[test]
    fn malformed_port_is_reported() {
        let err = Config::from_lookup(lookup_from(&[("MYTUBE_DATABASE_PORT", "five")]))
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { key: "MYTUBE_DATABASE_PORT", .. }
        ));
    }
}
