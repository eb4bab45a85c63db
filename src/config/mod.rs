//! Configuration system
//!
//! Loads ~/.config/ghcards/config.yaml with support for:
//! - GitHub credentials and GraphQL endpoint
//! - Default username fallback
//! - Listen address
//! - Cache TTL
//!
//! Environment variables (`GITHUB_API_TOKEN`, `GITHUB_USERNAME`, `PORT`, ...)
//! override values from the file.

mod cards_config;
pub mod validation;

pub use cards_config::{
    CacheSettings, CardsConfig, GitHubConfig, ServerConfig, DEFAULT_GRAPHQL_URL,
};
pub use validation::{validate_config, validate_config_result, ValidationError};
