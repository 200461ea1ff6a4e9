use crate::config::TrackerConfig;
use crate::domain::submission::NewIssue;
use crate::services::intake_service::{IssueTracker, TrackerError};
use async_trait::async_trait;
use reqwest::header;

/// GitHub-backed issue tracker.
///
/// Posts to the configured issue-creation endpoint with bearer-token
/// authorization. Any 2xx/3xx answer counts as success; everything else is
/// surfaced with the raw response text. No retries.
#[derive(Debug, Clone)]
pub struct GithubTracker {
    client: reqwest::Client,
    issues_url: String,
    token: String,
}

impl GithubTracker {
    /// Builds the tracker client.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: &TrackerConfig) -> anyhow::Result<Self> {
        // GitHub rejects requests without a User-Agent.
        let client = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client, issues_url: config.issues_url.clone(), token: config.token.clone() })
    }
}

#[async_trait]
impl IssueTracker for GithubTracker {
    async fn create_issue(&self, issue: &NewIssue) -> Result<(), TrackerError> {
        let response = self
            .client
            .post(&self.issues_url)
            .bearer_auth(&self.token)
            .header(header::ACCEPT, "application/vnd.github+json")
            .json(issue)
            .send()
            .await
            .map_err(|e| TrackerError::Transport(e.into()))?;

        let status = response.status();
        if status.is_success() || status.is_redirection() {
            tracing::debug!(status = status.as_u16(), "issue created");
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(TrackerError::Rejected { status: status.as_u16(), body })
    }
}
