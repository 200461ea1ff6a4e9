use async_trait::async_trait;
use axum::Router;
use intake_server::api;
use intake_server::config::{
    Config, CooldownConfig, HealthConfig, IdentityConfig, LogFormat, ServerConfig, StoreConfig,
    TelemetryConfig, TrackerConfig,
};
use intake_server::domain::submission::NewIssue;
use intake_server::services::intake_service::{
    CooldownStore, IntakeService, IssueTracker, TrackerError,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub fn now_ms() -> i64 {
    (time::OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as i64
}

/// Cooldown store fake: a plain map of identity -> (timestamp, retention).
#[derive(Debug, Default)]
pub struct InMemoryCooldownStore {
    entries: Mutex<HashMap<String, (i64, u64)>>,
}

#[allow(dead_code)]
impl InMemoryCooldownStore {
    pub fn set_last_submission(&self, identity: &str, timestamp_ms: i64) {
        self.entries.lock().unwrap().insert(identity.to_string(), (timestamp_ms, 0));
    }

    pub fn entry(&self, identity: &str) -> Option<(i64, u64)> {
        self.entries.lock().unwrap().get(identity).copied()
    }

    pub fn write_count(&self) -> usize {
        self.entries.lock().unwrap().len()
    }
}

#[async_trait]
impl CooldownStore for InMemoryCooldownStore {
    async fn last_submission_ms(&self, identity: &str) -> anyhow::Result<Option<i64>> {
        Ok(self.entries.lock().unwrap().get(identity).map(|(ts, _)| *ts))
    }

    async fn record_submission_ms(
        &self,
        identity: &str,
        timestamp_ms: i64,
        retention_secs: u64,
    ) -> anyhow::Result<()> {
        self.entries.lock().unwrap().insert(identity.to_string(), (timestamp_ms, retention_secs));
        Ok(())
    }
}

/// Tracker fake that records every issue it is asked to create.
#[derive(Debug, Default)]
pub struct RecordingTracker {
    calls: AtomicUsize,
    issues: Mutex<Vec<NewIssue>>,
    rejected: Option<(u16, String)>,
}

#[allow(dead_code)]
impl RecordingTracker {
    pub fn rejecting(status: u16, body: &str) -> Self {
        Self { rejected: Some((status, body.to_string())), ..Self::default() }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn issues(&self) -> Vec<NewIssue> {
        self.issues.lock().unwrap().clone()
    }
}

#[async_trait]
impl IssueTracker for RecordingTracker {
    async fn create_issue(&self, issue: &NewIssue) -> Result<(), TrackerError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.issues.lock().unwrap().push(issue.clone());

        match &self.rejected {
            Some((status, body)) => {
                Err(TrackerError::Rejected { status: *status, body: body.clone() })
            }
            None => Ok(()),
        }
    }
}

#[allow(dead_code)]
pub fn test_config() -> Config {
    Config {
        server: ServerConfig { host: "127.0.0.1".to_string(), port: 0, mgmt_port: 0 },
        store: StoreConfig { redis_url: "redis://127.0.0.1:6379".to_string() },
        tracker: TrackerConfig {
            issues_url: "https://api.github.com/repos/acme/support-platform/issues".to_string(),
            token: "test-token".to_string(),
        },
        cooldown: CooldownConfig { window_secs: 300, retention_secs: 3600 },
        identity: IdentityConfig { client_ip_header: "cf-connecting-ip".to_string() },
        health: HealthConfig { store_timeout_ms: 2000 },
        telemetry: TelemetryConfig { log_format: LogFormat::Text },
    }
}

#[allow(dead_code)]
pub fn test_app(store: Arc<InMemoryCooldownStore>, tracker: Arc<RecordingTracker>) -> Router {
    let config = test_config();
    let intake_service = IntakeService::new(store, tracker, &config.cooldown);
    api::app_router(config, intake_service)
}
