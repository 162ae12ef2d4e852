//! GraphQL query and response shapes for pull request lookup

use std::collections::BTreeSet;

use serde::Deserialize;
use serde_json::{Value, json};

use super::PullRequestInfo;

/// Number of most recent APPROVED reviews requested
pub const MAX_REVIEWS: u32 = 5;

/// Number of labels requested (GitHub's page size limit)
pub const MAX_LABELS: u32 = 100;

const PULL_REQUEST_QUERY: &str = r#"
query($owner: String!, $name: String!, $number: Int!, $reviews: Int!, $labels: Int!) {
  repository(owner: $owner, name: $name) {
    pullRequest(number: $number) {
      author { login }
      reviews(last: $reviews, states: APPROVED) {
        nodes { author { login } }
      }
      labels(first: $labels) {
        edges { node { name } }
      }
    }
  }
}
"#;

/// Build the request body for a pull request lookup
pub fn pull_request_request(owner: &str, name: &str, number: u64) -> Value {
    json!({
        "query": PULL_REQUEST_QUERY,
        "variables": {
            "owner": owner,
            "name": name,
            "number": number,
            "reviews": MAX_REVIEWS,
            "labels": MAX_LABELS,
        }
    })
}

#[derive(Debug, Deserialize)]
pub struct Response {
    pub data: Option<Data>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct Data {
    pub repository: Option<Repository>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Repository {
    pub pull_request: Option<PullRequest>,
}

#[derive(Debug, Deserialize)]
pub struct PullRequest {
    pub author: Option<Actor>,
    pub reviews: Nodes<Review>,
    pub labels: Edges<Label>,
}

#[derive(Debug, Deserialize)]
pub struct Actor {
    pub login: String,
}

#[derive(Debug, Deserialize)]
pub struct Review {
    pub author: Option<Actor>,
}

#[derive(Debug, Deserialize)]
pub struct Label {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct Nodes<T> {
    #[serde(default = "Vec::new")]
    pub nodes: Vec<T>,
}

#[derive(Debug, Deserialize)]
pub struct Edges<T> {
    #[serde(default = "Vec::new")]
    pub edges: Vec<Edge<T>>,
}

#[derive(Debug, Deserialize)]
pub struct Edge<T> {
    pub node: T,
}

impl Response {
    /// Extract the pull request, or a message describing why it is missing
    pub fn into_pull_request(self) -> Result<PullRequest, String> {
        let pull_request = self
            .data
            .and_then(|data| data.repository)
            .and_then(|repo| repo.pull_request);

        match pull_request {
            Some(pr) => Ok(pr),
            None if self.errors.is_empty() => Err("empty response".to_string()),
            None => Err(self
                .errors
                .into_iter()
                .map(|e| e.message)
                .collect::<Vec<_>>()
                .join("; ")),
        }
    }
}

impl From<PullRequest> for PullRequestInfo {
    fn from(pr: PullRequest) -> Self {
        // A reviewer who approved more than once appears once
        let approvers: BTreeSet<String> = pr
            .reviews
            .nodes
            .into_iter()
            .filter_map(|review| review.author)
            .map(|actor| actor.login)
            .collect();

        Self {
            author: pr.author.map(|actor| actor.login).unwrap_or_default(),
            labels: pr
                .labels
                .edges
                .into_iter()
                .map(|edge| edge.node.name)
                .collect(),
            approvers: approvers.into_iter().collect(),
        }
    }
}
