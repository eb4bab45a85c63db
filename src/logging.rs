//! Logging configuration using tracing
//!
//! Provides structured logging to stderr with support for the RUST_LOG environment variable.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter when RUST_LOG is unset
const DEFAULT_FILTER: &str = "info";

/// Initialize the tracing subscriber
///
/// Sets up structured logging with:
/// - Filtering via RUST_LOG environment variable (defaults to "info" so the
///   server reports its listen address and cache activity)
/// - Formatted output to stderr
///
/// # Example RUST_LOG values
/// - `RUST_LOG=warn` - Only warnings and errors
/// - `RUST_LOG=ghcards=debug` - Debug level for ghcards (cache hits, pages)
/// - `RUST_LOG=ghcards=trace,tower_http=debug` - Different levels per crate
///
/// # Errors
/// Returns an error if the subscriber has already been initialized
pub fn init() -> crate::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_line_number(true)
                .with_writer(std::io::stderr),
        )
        .try_init()
        .map_err(|e| crate::CardsError::Other(format!("Failed to initialize tracing: {}", e)))?;

    Ok(())
}

/// Initialize logging for tests (no-op if already initialized)
pub fn init_test() {
    let _ = init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_test_helper() {
        // Should never panic
        init_test();
        init_test();
    }

    #[test]
    fn test_logging_macros() {
        init_test();

        tracing::debug!(username = "octocat", kind = "languages", "cache miss");
        tracing::info!(pages = 3, repositories = 240, "Fetched GitHub profile");
    }
}
