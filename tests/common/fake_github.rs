//! Canned pull request lookup.

use std::cell::RefCell;
use std::collections::HashMap;

use relist::github::{GitHubError, PullRequestInfo, PullRequestLookup};

/// In-memory stand-in for the GitHub API.
///
/// Unknown pull request numbers fail the way a non-200 response would.
#[derive(Default)]
pub struct FakeGitHub {
    pull_requests: HashMap<String, PullRequestInfo>,
    requests: RefCell<Vec<String>>,
}

impl FakeGitHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a pull request.
    pub fn with_pr(
        mut self,
        number: &str,
        author: &str,
        labels: &[&str],
        approvers: &[&str],
    ) -> Self {
        self.pull_requests.insert(
            number.to_string(),
            PullRequestInfo {
                author: author.to_string(),
                labels: labels.iter().map(|l| l.to_string()).collect(),
                approvers: approvers.iter().map(|a| a.to_string()).collect(),
            },
        );
        self
    }

    /// Pull request numbers looked up so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl PullRequestLookup for FakeGitHub {
    fn pull_request(&self, number: &str) -> Result<PullRequestInfo, GitHubError> {
        self.requests.borrow_mut().push(number.to_string());
        self.pull_requests
            .get(number)
            .cloned()
            .ok_or_else(|| GitHubError::Status {
                number: number.to_string(),
                status: 502,
                body: "Bad Gateway".to_string(),
            })
    }
}
