//! Blocking GitHub GraphQL client

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT};
use tracing::{debug, info};

use super::query::{Response, pull_request_request};
use super::{GitHubError, PullRequestInfo, PullRequestLookup};

/// Client for one GitHub repository
#[derive(Debug, Clone)]
pub struct GitHubClient {
    http: Client,
    endpoint: String,
    owner: String,
    name: String,
}

impl GitHubClient {
    /// Create a client for `<owner>/<name>` talking to `endpoint`
    ///
    /// Requests are sent unauthenticated when `token` is `None`; GitHub's
    /// GraphQL API rejects those, which surfaces on the first lookup.
    pub fn new(
        endpoint: impl Into<String>,
        owner: impl Into<String>,
        name: impl Into<String>,
        token: Option<&str>,
    ) -> Result<Self, GitHubError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("relist/", env!("CARGO_PKG_VERSION"))),
        );
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(token) = token
            && let Ok(mut value) = HeaderValue::from_str(&format!("token {token}"))
        {
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let http = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            http,
            endpoint: endpoint.into(),
            owner: owner.into(),
            name: name.into(),
        })
    }
}

impl PullRequestLookup for GitHubClient {
    fn pull_request(&self, number: &str) -> Result<PullRequestInfo, GitHubError> {
        let parsed: u64 = number
            .parse()
            .map_err(|_| GitHubError::InvalidNumber(number.to_string()))?;

        info!(owner = %self.owner, repo = %self.name, pr = parsed, "querying GitHub");
        let response = self
            .http
            .post(&self.endpoint)
            .json(&pull_request_request(&self.owner, &self.name, parsed))
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(GitHubError::Status {
                number: number.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        let response: Response = response.json()?;
        let pull_request =
            response
                .into_pull_request()
                .map_err(|message| GitHubError::MissingPullRequest {
                    number: number.to_string(),
                    message,
                })?;

        let info = PullRequestInfo::from(pull_request);
        debug!(pr = parsed, ?info, "pull request metadata");
        Ok(info)
    }
}
