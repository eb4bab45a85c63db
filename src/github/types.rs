//! GitHub profile types
//!
//! Domain types handed to the aggregator, plus the GraphQL wire shapes they
//! are decoded from.

use serde::{Deserialize, Serialize};

/// One language edge of a repository (bytes of code in that language)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageEdge {
    pub name: String,
    pub size: u64,
}

impl LanguageEdge {
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }
}

/// Language edges of a single repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryLanguages {
    pub name: String,
    pub languages: Vec<LanguageEdge>,
}

/// Contribution totals as reported by `contributionsCollection`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionsSummary {
    pub total_commit_contributions: u64,
    pub total_pull_request_contributions: u64,
    pub total_issue_contributions: u64,
}

/// Everything fetched for one user across all repository pages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub login: String,
    pub repositories: Vec<RepositoryLanguages>,
    /// Captured from the first page only
    pub contributions: Option<ContributionsSummary>,
}

// ============================================================================
// GraphQL wire types
// ============================================================================

/// GraphQL response wrapper
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct GraphQLResponse<T> {
    pub data: Option<T>,
    pub errors: Option<Vec<GraphQLError>>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct GraphQLError {
    pub message: String,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ProfileData {
    pub user: Option<UserNode>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct UserNode {
    #[serde(rename = "contributionsCollection", default)]
    pub contributions_collection: Option<ContributionsSummary>,
    pub repositories: RepositoryConnection,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RepositoryConnection {
    #[serde(rename = "pageInfo")]
    pub page_info: PageInfo,
    #[serde(default)]
    pub nodes: Vec<Option<RepositoryNode>>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct PageInfo {
    #[serde(rename = "hasNextPage")]
    pub has_next_page: bool,
    #[serde(rename = "endCursor")]
    pub end_cursor: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RepositoryNode {
    pub name: String,
    #[serde(default)]
    pub languages: Option<LanguageConnection>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct LanguageConnection {
    #[serde(default)]
    pub edges: Vec<LanguageEdgeNode>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct LanguageEdgeNode {
    pub size: u64,
    pub node: LanguageNode,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct LanguageNode {
    pub name: String,
}

impl From<RepositoryNode> for RepositoryLanguages {
    fn from(node: RepositoryNode) -> Self {
        let languages = node
            .languages
            .map(|conn| {
                conn.edges
                    .into_iter()
                    .map(|edge| LanguageEdge::new(edge.node.name, edge.size))
                    .collect()
            })
            .unwrap_or_default();

        Self {
            name: node.name,
            languages,
        }
    }
}
