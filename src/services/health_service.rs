use crate::adapters::redis::RedisClient;
use crate::config::HealthConfig;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;

/// Readiness checks for the external collaborators the handler depends on.
#[derive(Clone, Debug)]
pub struct HealthService {
    store: Arc<RedisClient>,
    config: HealthConfig,
}

impl HealthService {
    #[must_use]
    pub fn new(store: Arc<RedisClient>, config: HealthConfig) -> Self {
        Self { store, config }
    }

    /// Checks cooldown-store connectivity.
    ///
    /// # Errors
    /// Returns a string describing the failure if the store is unreachable.
    pub async fn check_store(&self) -> Result<(), String> {
        let store_timeout = Duration::from_millis(self.config.store_timeout_ms);

        match timeout(store_timeout, self.store.ping()).await {
            Ok(Ok(())) => Ok(()),
            Ok(Err(e)) => Err(format!("Store connection failed: {e:?}")),
            Err(_) => Err("Store connection timed out".to_string()),
        }
    }
}
