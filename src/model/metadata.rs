//! Commit metadata data model

use serde::{Deserialize, Serialize};

/// Everything fetched about one commit, keyed by its hash in the cache
///
/// Aliases accept cache files written by the earlier script-based tool.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CommitMetadata {
    /// Subject line
    pub title: String,

    /// Body after the subject (None when the commit has no body)
    #[serde(default)]
    pub body: Option<String>,

    /// Pull request number parsed from the title
    #[serde(default, alias = "pr_number")]
    pub pull_request_number: Option<String>,

    /// Paths touched by the commit
    ///
    /// Stored for future heuristics; classification does not read it.
    #[serde(default)]
    pub files_changed: Vec<String>,

    /// Pull request label names, in fetch order
    #[serde(default)]
    pub labels: Vec<String>,

    /// Pull request author login (empty when unreviewed)
    #[serde(default)]
    pub author: String,

    /// Approving reviewers, deduplicated and sorted
    #[serde(default, alias = "accepters")]
    pub approvers: Vec<String>,
}
