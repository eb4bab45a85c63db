//! ghcards - GitHub profile cards as SVG
//!
//! An HTTP service that fetches a user's repositories and contribution totals
//! from the GitHub GraphQL API, aggregates them into top languages and
//! contribution stats, caches the aggregates, and renders them as embeddable
//! SVG cards. A third card renders an arbitrary skill list.
//!
//! # Architecture
//!
//! - **github**: Paginated GraphQL client and the `ProfileSource` seam
//! - **aggregator**: Top-5 language merge and contribution stats
//! - **cache**: In-memory TTL cache with an injectable clock
//! - **profile**: Cache-backed aggregation service
//! - **cards**: Languages, stats and skills SVG renderers
//! - **server**: axum routes, error mapping and request logging
//! - **config**: YAML configuration with environment overrides

// Core modules
pub mod aggregator;
pub mod cache;
pub mod config;
pub mod error;
pub mod github;
pub mod profile;

// Rendering and serving
pub mod cards;
pub mod server;

// Observability
pub mod logging;
pub mod metrics;

// Re-exports
pub use error::{CardsError, Result};
pub use profile::{Aggregates, ProfileService};
pub use server::CardsServer;
