use crate::config::CooldownConfig;
use crate::domain::submission::{NewIssue, Submission};
use crate::error::{IntakeError, Result};
use anyhow::Context;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackerError {
    /// The tracker answered with a non-2xx/3xx status.
    #[error("tracker rejected the issue (status {status}): {body}")]
    Rejected { status: u16, body: String },
    /// The tracker could not be reached at all.
    #[error("tracker unreachable: {0}")]
    Transport(#[from] anyhow::Error),
}

/// Read/write access to per-identity cooldown timestamps.
///
/// Keyed by submitter identity; values are epoch milliseconds of the last
/// accepted submission. Entries expire on their own after `retention_secs`.
#[async_trait]
pub trait CooldownStore: Send + Sync + std::fmt::Debug {
    /// Returns the timestamp of the identity's last accepted submission.
    ///
    /// # Errors
    /// Returns an error if the store is unreachable.
    async fn last_submission_ms(&self, identity: &str) -> anyhow::Result<Option<i64>>;

    /// Records an accepted submission for the identity.
    ///
    /// # Errors
    /// Returns an error if the store is unreachable.
    async fn record_submission_ms(
        &self,
        identity: &str,
        timestamp_ms: i64,
        retention_secs: u64,
    ) -> anyhow::Result<()>;
}

/// Issue-creation capability of the external tracker.
#[async_trait]
pub trait IssueTracker: Send + Sync + std::fmt::Debug {
    /// Files a new issue with the tracker.
    ///
    /// # Errors
    /// Returns `TrackerError::Rejected` when the tracker answers with a
    /// non-success status, `TrackerError::Transport` when it cannot be
    /// reached.
    async fn create_issue(&self, issue: &NewIssue) -> std::result::Result<(), TrackerError>;
}

pub(crate) fn now_ms() -> i64 {
    #[allow(clippy::cast_possible_truncation)]
    let ms = (time::OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as i64;
    ms
}

/// Orchestrates the cooldown check, tracker submission, and cooldown write.
///
/// The store read and write are not atomic across concurrent requests from
/// one identity; two requests inside the window can both pass the check.
#[derive(Clone, Debug)]
pub struct IntakeService {
    store: Arc<dyn CooldownStore>,
    tracker: Arc<dyn IssueTracker>,
    window_ms: i64,
    retention_secs: u64,
}

impl IntakeService {
    #[must_use]
    pub fn new(
        store: Arc<dyn CooldownStore>,
        tracker: Arc<dyn IssueTracker>,
        config: &CooldownConfig,
    ) -> Self {
        #[allow(clippy::cast_possible_wrap)]
        let window_ms = (config.window_secs * 1000) as i64;
        Self { store, tracker, window_ms, retention_secs: config.retention_secs }
    }

    /// Returns the remaining wait in whole seconds if the identity is still
    /// inside its cooldown window, `None` if it may submit.
    ///
    /// # Errors
    /// Returns `IntakeError::Internal` if the store lookup fails.
    pub async fn check_cooldown(&self, identity: &str) -> Result<Option<u64>> {
        let last = self
            .store
            .last_submission_ms(identity)
            .await
            .context("cooldown lookup failed")?;

        Ok(last.and_then(|last| {
            let remaining = self.window_ms - (now_ms() - last);
            if remaining > 0 {
                #[allow(clippy::cast_sign_loss)]
                let wait_secs = (remaining as u64).div_ceil(1000);
                Some(wait_secs)
            } else {
                None
            }
        }))
    }

    /// Files the submission with the tracker and refreshes the identity's
    /// cooldown entry.
    ///
    /// The cooldown write only happens after the tracker accepted the issue,
    /// and is best-effort: a failed write is logged and the submission still
    /// counts as accepted.
    ///
    /// # Errors
    /// Returns `IntakeError::Tracker` when the tracker answers non-success,
    /// `IntakeError::Internal` when it cannot be reached.
    #[tracing::instrument(skip(self, submission))]
    pub async fn submit(&self, identity: &str, submission: &Submission) -> Result<()> {
        let issue = NewIssue::from(submission);

        self.tracker.create_issue(&issue).await.map_err(|e| match e {
            TrackerError::Rejected { status, body } => {
                tracing::error!(status, "tracker rejected submission");
                IntakeError::Tracker { status, body }
            }
            TrackerError::Transport(e) => IntakeError::Internal(e.context("tracker call failed")),
        })?;

        if let Err(e) = self
            .store
            .record_submission_ms(identity, now_ms(), self.retention_secs)
            .await
        {
            tracing::warn!(error = %e, identity, "cooldown write failed after accepted submission");
        }

        tracing::info!(identity, "submission forwarded to tracker");
        Ok(())
    }
}
