//! ghcards configuration file handling
//!
//! Loads ~/.config/ghcards/config.yaml (or an explicit path) and layers
//! environment overrides on top.

use crate::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Public GitHub GraphQL endpoint
pub const DEFAULT_GRAPHQL_URL: &str = "https://api.github.com/graphql";

/// GitHub API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubConfig {
    /// Bearer token for the GraphQL API
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// GraphQL endpoint URL
    #[serde(default = "default_graphql_url")]
    pub graphql_url: String,

    /// Username used when a request does not name one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_username: Option<String>,
}

fn default_graphql_url() -> String {
    DEFAULT_GRAPHQL_URL.to_string()
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            token: None,
            graphql_url: default_graphql_url(),
            default_username: None,
        }
    }
}

/// HTTP listener settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Aggregate cache settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheSettings {
    /// Time-to-live applied to every cache entry, in seconds
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: u64,
}

fn default_ttl_secs() -> u64 {
    crate::cache::DEFAULT_TTL.as_secs()
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            ttl_secs: default_ttl_secs(),
        }
    }
}

/// ghcards configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CardsConfig {
    #[serde(default)]
    pub github: GitHubConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub cache: CacheSettings,
}

impl CardsConfig {
    /// Create a configuration with defaults only
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve the effective configuration
    ///
    /// An explicit path must exist. Without one, the default path is used if
    /// present, otherwise defaults. Environment overrides are applied last.
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::load(path)?,
            None => {
                let default = Self::default_path();
                if default.exists() {
                    Self::load(&default)?
                } else {
                    tracing::debug!(path = %default.display(), "No config file, using defaults");
                    Self::new()
                }
            }
        };
        config.apply_env_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Load configuration from a specific path
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(crate::CardsError::Config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }

        tracing::info!(path = %path.display(), "Loading ghcards configuration");

        let content = fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;

        tracing::debug!(
            port = config.server.port,
            ttl_secs = config.cache.ttl_secs,
            "Configuration loaded successfully"
        );

        Ok(config)
    }

    /// Save configuration to a specific path
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml::to_string(self)?;
        fs::write(path, yaml)?;

        Ok(())
    }

    /// Get the default config path (~/.config/ghcards/config.yaml)
    pub fn default_path() -> PathBuf {
        let mut path = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push(".config");
        path.push("ghcards");
        path.push("config.yaml");
        path
    }

    /// Apply environment overrides using the given variable lookup
    ///
    /// Token: `GITHUB_API_TOKEN`, then `GITHUB_TOKEN`.
    /// Default user: `GITHUB_USERNAME`, then `USERNAME`.
    /// Port: `PORT` (ignored if not a valid port number).
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(token) = non_empty("GITHUB_API_TOKEN").or_else(|| non_empty("GITHUB_TOKEN")) {
            self.github.token = Some(token);
        }

        if let Some(user) = non_empty("GITHUB_USERNAME").or_else(|| non_empty("USERNAME")) {
            self.github.default_username = Some(user);
        }

        if let Some(port) = non_empty("PORT") {
            match port.trim().parse() {
                Ok(port) => self.server.port = port,
                Err(_) => tracing::warn!(value = %port, "Ignoring invalid PORT"),
            }
        }
    }

    /// Cache TTL as a Duration
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache.ttl_secs)
    }

    /// Listen address in `host:port` form
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::NamedTempFile;

    fn env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = CardsConfig::new();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.cache.ttl_secs, 6 * 60 * 60);
        assert_eq!(config.github.graphql_url, DEFAULT_GRAPHQL_URL);
        assert!(config.github.token.is_none());
    }

    #[test]
    fn test_env_overrides() {
        let mut config = CardsConfig::new();
        config.apply_env_overrides(env(&[
            ("GITHUB_API_TOKEN", "ghp_primary"),
            ("GITHUB_TOKEN", "ghp_fallback"),
            ("USERNAME", "os-user"),
            ("PORT", "8080"),
        ]));

        assert_eq!(config.github.token.as_deref(), Some("ghp_primary"));
        assert_eq!(config.github.default_username.as_deref(), Some("os-user"));
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn test_env_fallbacks_and_invalid_port() {
        let mut config = CardsConfig::new();
        config.apply_env_overrides(env(&[
            ("GITHUB_TOKEN", "ghp_fallback"),
            ("GITHUB_USERNAME", "octocat"),
            ("USERNAME", "os-user"),
            ("PORT", "not-a-port"),
        ]));

        assert_eq!(config.github.token.as_deref(), Some("ghp_fallback"));
        assert_eq!(config.github.default_username.as_deref(), Some("octocat"));
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn test_save_and_load() {
        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path();

        let mut config = CardsConfig::new();
        config.github.default_username = Some("octocat".to_string());
        config.cache.ttl_secs = 60;
        config.save(path).unwrap();

        let loaded = CardsConfig::load(path).unwrap();
        assert_eq!(loaded.github.default_username.as_deref(), Some("octocat"));
        assert_eq!(loaded.cache_ttl(), Duration::from_secs(60));
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config: CardsConfig = serde_yaml::from_str("server:\n  port: 9000\n").unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.cache.ttl_secs, 21600);
        assert_eq!(config.listen_addr(), "0.0.0.0:9000");
    }

    #[test]
    fn test_load_missing_file() {
        let result = CardsConfig::load("/nonexistent/config.yaml");
        assert!(result.is_err());
    }

    #[test]
    fn test_default_path() {
        let path = CardsConfig::default_path();
        assert!(path.ends_with("ghcards/config.yaml"));
    }
}
