//! GitHub GraphQL client
//!
//! Pages through a user's owned, public, non-fork repositories and collects
//! their language edges along with the contributions summary.

use super::types::{
    GraphQLResponse, ProfileData, RepositoryLanguages, UserNode, UserProfile,
};
use super::ProfileSource;
use crate::config::GitHubConfig;
use crate::{CardsError, Result};
use async_trait::async_trait;
use reqwest::{header, Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, info};

/// Per-request timeout for GraphQL queries
const GRAPHQL_TIMEOUT: Duration = Duration::from_secs(30);

/// Repositories requested per page (GitHub's maximum)
pub const PAGE_SIZE: u32 = 100;

const PROFILE_QUERY: &str = r#"
    query getGithubProfileData($username: String!, $first: Int!, $cursor: String) {
        user(login: $username) {
            contributionsCollection {
                totalCommitContributions
                totalPullRequestContributions
                totalIssueContributions
            }
            repositories(
                first: $first
                after: $cursor
                privacy: PUBLIC
                ownerAffiliations: OWNER
                isFork: false
            ) {
                pageInfo { hasNextPage endCursor }
                nodes {
                    name
                    languages(first: 10, orderBy: { field: SIZE, direction: DESC }) {
                        edges {
                            size
                            node { name color }
                        }
                    }
                }
            }
        }
    }
"#;

/// GitHub GraphQL API client
pub struct GitHubClient {
    client: Client,
    graphql_url: String,
    auth_token: Option<String>,
}

impl GitHubClient {
    /// Create a new client from the GitHub section of the config
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: &GitHubConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(GRAPHQL_TIMEOUT)
            .default_headers({
                let mut headers = header::HeaderMap::new();
                headers.insert(
                    header::USER_AGENT,
                    header::HeaderValue::from_static(concat!("ghcards/", env!("CARGO_PKG_VERSION"))),
                );
                headers.insert(
                    header::ACCEPT,
                    header::HeaderValue::from_static("application/json"),
                );
                headers
            })
            .build()?;

        Ok(Self {
            client,
            graphql_url: config.graphql_url.trim_end_matches('/').to_string(),
            auth_token: config.token.clone(),
        })
    }

    pub fn is_authenticated(&self) -> bool {
        self.auth_token.is_some()
    }

    /// Execute a GraphQL query
    ///
    /// Non-2xx statuses and transport failures become `RemoteFetch`; an
    /// `errors` array becomes `GraphProtocol`, or `UserNotFound` when every
    /// error is GitHub's NOT_FOUND.
    async fn graphql<T: DeserializeOwned>(
        &self,
        query: &str,
        variables: serde_json::Value,
        username: &str,
    ) -> Result<T> {
        let body = serde_json::json!({
            "query": query,
            "variables": variables,
        });

        let mut request = self.client.post(&self.graphql_url).json(&body);
        if let Some(ref token) = self.auth_token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| CardsError::RemoteFetch(e.to_string()))?;

        match response.status() {
            status if status.is_success() => {
                let result: GraphQLResponse<T> = response
                    .json()
                    .await
                    .map_err(|e| CardsError::RemoteFetch(format!("invalid response body: {}", e)))?;

                if let Some(errors) = result.errors.filter(|errors| !errors.is_empty()) {
                    if errors.iter().all(|e| e.kind.as_deref() == Some("NOT_FOUND")) {
                        return Err(CardsError::UserNotFound(username.to_string()));
                    }
                    let error_msg = errors
                        .iter()
                        .map(|e| e.message.clone())
                        .collect::<Vec<_>>()
                        .join(", ");
                    return Err(CardsError::GraphProtocol(error_msg));
                }

                result
                    .data
                    .ok_or_else(|| CardsError::RemoteFetch("No data in GraphQL response".to_string()))
            }
            StatusCode::UNAUTHORIZED => Err(CardsError::RemoteFetch(
                "GitHub authentication failed".to_string(),
            )),
            status => {
                let error_body = response.text().await.unwrap_or_default();
                Err(CardsError::RemoteFetch(format!(
                    "HTTP {}: {}",
                    status, error_body
                )))
            }
        }
    }

    /// Fetch one page of repositories
    async fn fetch_page(&self, username: &str, cursor: Option<&str>) -> Result<UserNode> {
        let variables = serde_json::json!({
            "username": username,
            "first": PAGE_SIZE,
            "cursor": cursor,
        });

        debug!(username = %username, cursor = ?cursor, "Fetching repository page");

        let data: ProfileData = self.graphql(PROFILE_QUERY, variables, username).await?;
        data.user
            .ok_or_else(|| CardsError::UserNotFound(username.to_string()))
    }

    /// Fetch every repository page for a user
    ///
    /// Pages are requested strictly in cursor order. Any failed page aborts
    /// the whole fetch; nothing partial is returned.
    pub async fn fetch_user_profile(&self, username: &str) -> Result<UserProfile> {
        let mut repositories = Vec::new();
        let mut contributions = None;
        let mut cursor: Option<String> = None;
        let mut pages = 0u32;

        loop {
            let user = self.fetch_page(username, cursor.as_deref()).await?;
            pages += 1;

            if pages == 1 {
                contributions = user.contributions_collection;
            }

            repositories.extend(
                user.repositories
                    .nodes
                    .into_iter()
                    .flatten()
                    .map(RepositoryLanguages::from),
            );

            let page_info = user.repositories.page_info;
            if !page_info.has_next_page {
                break;
            }
            cursor = match page_info.end_cursor {
                Some(next) => Some(next),
                None => {
                    return Err(CardsError::RemoteFetch(
                        "hasNextPage set without an endCursor".to_string(),
                    ))
                }
            };
        }

        info!(
            username = %username,
            pages = pages,
            repositories = repositories.len(),
            "Fetched GitHub profile"
        );

        Ok(UserProfile {
            login: username.to_string(),
            repositories,
            contributions,
        })
    }
}

#[async_trait]
impl ProfileSource for GitHubClient {
    async fn fetch_user_profile(&self, username: &str) -> Result<UserProfile> {
        GitHubClient::fetch_user_profile(self, username).await
    }
}
