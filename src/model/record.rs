//! Worklist record data model

use serde::Serialize;

/// Column names of the persisted worklist, in order
pub const RECORD_FIELDS: [&str; 11] = [
    "commit_hash",
    "category",
    "topic",
    "title",
    "pull_request_link",
    "author",
    "labels",
    "approver_1",
    "approver_2",
    "approver_3",
    "merge_into",
];

/// One row of the release-notes worklist
///
/// Field order matches [`RECORD_FIELDS`]; serialization relies on it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct CommitRecord {
    /// Full commit hash (unique within a worklist)
    pub commit_hash: String,

    /// Release-notes category, e.g. `bug_fixes`
    pub category: String,

    /// Topic within the category, e.g. `performance`
    pub topic: String,

    /// Commit subject (or the `new_title` override on load)
    pub title: String,

    /// Link to the pull request page, when the commit came from one
    pub pull_request_link: Option<String>,

    /// Pull request author login
    pub author: String,

    /// Comma-joined pull request labels
    pub labels: String,

    // Kept as three columns so the CSV stays spreadsheet-friendly
    pub approver_1: String,
    pub approver_2: String,
    pub approver_3: String,

    /// Hash of the record this one is folded into in the report
    pub merge_into: Option<String>,
}

impl CommitRecord {
    /// Is this record folded into another one?
    pub fn is_merged(&self) -> bool {
        self.merge_into.as_deref().is_some_and(|target| !target.is_empty())
    }
}

impl std::fmt::Display for CommitRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Commit({}, {}, {}, {})",
            self.commit_hash, self.category, self.topic, self.title
        )
    }
}
