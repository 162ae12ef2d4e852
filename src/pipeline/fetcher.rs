//! Per-commit metadata fetching from git and GitHub

use thiserror::Error;
use tracing::{info, warn};

use crate::git::parser::Parser;
use crate::git::{GitError, GitExecutor};
use crate::github::{GitHubError, PullRequestInfo, PullRequestLookup};
use crate::model::CommitMetadata;

/// Errors fetching a commit's metadata
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("git query for {commit} failed: {source}")]
    Git {
        commit: String,
        #[source]
        source: GitError,
    },

    #[error("GitHub query for {commit} failed: {source}")]
    HostingService {
        commit: String,
        #[source]
        source: GitHubError,
    },
}

/// Produces the metadata of a commit
pub trait MetadataFetcher {
    fn fetch(&self, commit_hash: &str) -> Result<CommitMetadata, FetchError>;
}

/// Fetches titles, bodies, and changed files from git, and review data
/// from the pull request named in the title
#[derive(Debug, Clone)]
pub struct CommitFetcher<L> {
    git: GitExecutor,
    lookup: L,
}

impl<L: PullRequestLookup> CommitFetcher<L> {
    pub fn new(git: GitExecutor, lookup: L) -> Self {
        Self { git, lookup }
    }
}

impl<L: PullRequestLookup> MetadataFetcher for CommitFetcher<L> {
    fn fetch(&self, commit_hash: &str) -> Result<CommitMetadata, FetchError> {
        info!(commit = %commit_hash, "fetching commit metadata");
        let git_err = |source| FetchError::Git {
            commit: commit_hash.to_string(),
            source,
        };

        let title = self.git.commit_title(commit_hash).map_err(git_err)?;
        let body = self.git.commit_body(commit_hash).map_err(git_err)?;
        let files_changed = self.git.files_changed(commit_hash).map_err(git_err)?;

        let pull_request_number = parse_pr_number(commit_hash, &title);
        let PullRequestInfo {
            author,
            labels,
            approvers,
        } = match &pull_request_number {
            Some(number) => {
                self.lookup
                    .pull_request(number)
                    .map_err(|source| FetchError::HostingService {
                        commit: commit_hash.to_string(),
                        source,
                    })?
            }
            None => PullRequestInfo::default(),
        };

        Ok(CommitMetadata {
            title,
            body: (!body.is_empty()).then_some(body),
            pull_request_number,
            files_changed,
            labels,
            author,
            approvers,
        })
    }
}

/// Pick the pull request number out of a commit subject
///
/// No match means the commit did not come through a pull request. With
/// several matches the first one wins.
pub fn parse_pr_number(commit_hash: &str, title: &str) -> Option<String> {
    let mut numbers = Parser::parse_pr_numbers(title).into_iter();
    let first = numbers.next();

    if first.is_none() {
        info!(commit = %commit_hash, %title, "could not parse PR number, ignoring PR");
    } else if numbers.next().is_some() {
        warn!(
            commit = %commit_hash,
            %title,
            "found several PR numbers, using the first one"
        );
    }

    first
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pr_number_single() {
        assert_eq!(
            parse_pr_number("abc", "Fix bug (#1234)"),
            Some("1234".to_string())
        );
    }

    #[test]
    fn test_parse_pr_number_missing() {
        assert_eq!(parse_pr_number("abc", "Fix bug"), None);
    }

    #[test]
    fn test_parse_pr_number_ambiguous_uses_first() {
        assert_eq!(
            parse_pr_number("abc", "Cherry-pick (#10) into release (#20)"),
            Some("10".to_string())
        );
    }
}
