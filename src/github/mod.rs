//! GitHub data source
//!
//! Fetches a user's repository languages and contribution totals from the
//! GitHub GraphQL API.
//!
//! # Overview
//!
//! [`GitHubClient`] issues the paginated `user.repositories` query and
//! assembles a [`UserProfile`]. The [`ProfileSource`] trait is the seam the
//! profile service depends on, so the service can run against an in-memory
//! source in tests.

pub mod client;
pub mod types;

use crate::Result;
use async_trait::async_trait;

pub use client::{GitHubClient, PAGE_SIZE};
pub use types::{ContributionsSummary, LanguageEdge, RepositoryLanguages, UserProfile};

/// Anything that can produce a complete user profile
#[async_trait]
pub trait ProfileSource: Send + Sync {
    /// Fetch all repositories and the contributions summary for `username`
    async fn fetch_user_profile(&self, username: &str) -> Result<UserProfile>;
}
