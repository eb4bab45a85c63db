//! Contribution stats reshaping

use crate::github::ContributionsSummary;
use crate::{CardsError, Result};
use serde::{Deserialize, Serialize};

/// Flat contribution counts rendered by the stats card
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionStats {
    pub commits: u64,
    pub pull_requests: u64,
    pub issues: u64,
}

impl ContributionStats {
    pub fn new(commits: u64, pull_requests: u64, issues: u64) -> Self {
        Self {
            commits,
            pull_requests,
            issues,
        }
    }

    /// Largest of the three counts, never below 1
    pub fn max_value(&self) -> u64 {
        self.commits.max(self.pull_requests).max(self.issues).max(1)
    }
}

impl From<ContributionsSummary> for ContributionStats {
    fn from(summary: ContributionsSummary) -> Self {
        Self {
            commits: summary.total_commit_contributions,
            pull_requests: summary.total_pull_request_contributions,
            issues: summary.total_issue_contributions,
        }
    }
}

/// Reshape the contributions summary of `username` into [`ContributionStats`]
pub fn derive_stats(
    username: &str,
    contributions: Option<&ContributionsSummary>,
) -> Result<ContributionStats> {
    contributions
        .copied()
        .map(ContributionStats::from)
        .ok_or_else(|| CardsError::MissingStats(username.to_string()))
}
