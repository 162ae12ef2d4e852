//! GitHub pull request metadata
//!
//! Talks to the GitHub GraphQL API to look up the author, approvers, and
//! labels of the pull request a commit was merged from.

mod client;
mod query;

pub use client::GitHubClient;

use thiserror::Error;

/// Errors that can occur when querying GitHub
#[derive(Error, Debug)]
pub enum GitHubError {
    #[error("GitHub query for PR #{number} failed with status {status}: {body}")]
    Status {
        number: String,
        status: u16,
        body: String,
    },

    #[error("GitHub returned no pull request #{number}: {message}")]
    MissingPullRequest { number: String, message: String },

    #[error("Invalid pull request number '{0}'")]
    InvalidNumber(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Review metadata of a single pull request
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PullRequestInfo {
    /// Login of the pull request author (empty for deleted accounts)
    pub author: String,
    /// Label names, in the order GitHub returns them
    pub labels: Vec<String>,
    /// Logins of reviewers with an APPROVED review, deduplicated and sorted
    pub approvers: Vec<String>,
}

/// Looks up pull request metadata by number
pub trait PullRequestLookup {
    fn pull_request(&self, number: &str) -> Result<PullRequestInfo, GitHubError>;
}

impl<T: PullRequestLookup + ?Sized> PullRequestLookup for &T {
    fn pull_request(&self, number: &str) -> Result<PullRequestInfo, GitHubError> {
        (**self).pull_request(number)
    }
}
