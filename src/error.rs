//! Error types for ghcards
//!
//! Defines a single error enum covering remote fetch failures, aggregation
//! problems and the ambient configuration/IO failures of the service.
//! Uses thiserror for ergonomic error handling.

use axum::http::StatusCode;
use thiserror::Error;

/// Result type alias for ghcards operations
pub type Result<T> = std::result::Result<T, CardsError>;

/// Error type for ghcards operations
#[derive(Error, Debug)]
pub enum CardsError {
    /// Transport failure or non-success status from the GitHub API
    #[error("GitHub API error: {0}")]
    RemoteFetch(String),

    /// Well-formed GraphQL response carrying an `errors` array
    #[error("GraphQL errors: {0}")]
    GraphProtocol(String),

    /// The queried login resolved to no user record
    #[error("GitHub user not found: {0}")]
    UserNotFound(String),

    /// Contributions summary absent from an otherwise successful fetch
    #[error("Contribution stats missing for user: {0}")]
    MissingStats(String),

    /// Malformed query string or request body
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// No username in the request and no default configured
    #[error("No username given and no default username configured")]
    MissingUsername,

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// HTTP client construction errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl CardsError {
    /// HTTP status the server answers with when a handler fails with this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            CardsError::UserNotFound(_) => StatusCode::NOT_FOUND,
            CardsError::RemoteFetch(_)
            | CardsError::GraphProtocol(_)
            | CardsError::MissingStats(_)
            | CardsError::Http(_) => StatusCode::BAD_GATEWAY,
            CardsError::MissingUsername | CardsError::BadRequest(_) => StatusCode::BAD_REQUEST,
            CardsError::Config(_)
            | CardsError::Io(_)
            | CardsError::Json(_)
            | CardsError::Yaml(_)
            | CardsError::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Short label used for metrics and log fields
    pub fn kind(&self) -> &'static str {
        match self {
            CardsError::RemoteFetch(_) => "remote_fetch",
            CardsError::GraphProtocol(_) => "graphql",
            CardsError::UserNotFound(_) => "user_not_found",
            CardsError::MissingStats(_) => "missing_stats",
            CardsError::BadRequest(_) => "bad_request",
            CardsError::MissingUsername => "missing_username",
            CardsError::Config(_) => "config",
            CardsError::Io(_) => "io",
            CardsError::Json(_) => "json",
            CardsError::Yaml(_) => "yaml",
            CardsError::Http(_) => "http",
            CardsError::Other(_) => "other",
        }
    }
}
