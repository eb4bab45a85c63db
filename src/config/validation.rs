//! Configuration validation
//!
//! Validates ghcards configuration for correctness:
//! - A GitHub token is available
//! - The GraphQL endpoint is an http(s) URL
//! - Port and cache TTL are non-zero

use super::cards_config::CardsConfig;
use crate::CardsError;

/// Validation error details
#[derive(Debug, Clone)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validation result
pub type ValidationResult = std::result::Result<(), Vec<ValidationError>>;

/// Validate a ghcards configuration
pub fn validate_config(config: &CardsConfig) -> ValidationResult {
    let mut errors = Vec::new();

    match config.github.token.as_deref() {
        None => errors.push(ValidationError::new(
            "github.token",
            "A GitHub token is required (set GITHUB_API_TOKEN)",
        )),
        Some(token) if token.trim().is_empty() => errors.push(ValidationError::new(
            "github.token",
            "GitHub token cannot be empty",
        )),
        Some(_) => {}
    }

    let url = &config.github.graphql_url;
    if !url.starts_with("http://") && !url.starts_with("https://") {
        errors.push(ValidationError::new(
            "github.graphql_url",
            format!("Invalid GraphQL URL: {}", url),
        ));
    }

    if config.github.default_username.is_none() {
        tracing::warn!("No default GitHub username configured; requests must pass ?username=");
    }

    if config.server.port == 0 {
        errors.push(ValidationError::new(
            "server.port",
            "Port must be greater than 0",
        ));
    }

    if config.cache.ttl_secs == 0 {
        errors.push(ValidationError::new(
            "cache.ttl_secs",
            "Cache TTL must be greater than 0",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validate configuration and return a Result
pub fn validate_config_result(config: &CardsConfig) -> crate::Result<()> {
    validate_config(config).map_err(|errors| {
        let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
        CardsError::Config(format!(
            "Configuration validation failed:\n  - {}",
            messages.join("\n  - ")
        ))
    })
}
