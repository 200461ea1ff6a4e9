use crate::adapters::redis::RedisClient;
use crate::services::intake_service::CooldownStore;
use async_trait::async_trait;
use redis::AsyncCommands;
use std::sync::Arc;

/// Redis-backed cooldown store.
///
/// One key per submitter identity, value = epoch milliseconds of the last
/// accepted submission. Expiry is delegated to Redis via `SET ... EX`.
#[derive(Debug, Clone)]
pub struct RedisCooldownStore {
    redis: Arc<RedisClient>,
    prefix: String,
}

impl RedisCooldownStore {
    #[must_use]
    pub fn new(redis: Arc<RedisClient>) -> Self {
        Self { redis, prefix: "last:".to_string() }
    }
}

#[async_trait]
impl CooldownStore for RedisCooldownStore {
    async fn last_submission_ms(&self, identity: &str) -> anyhow::Result<Option<i64>> {
        let mut conn = self.redis.connection();
        let full_key = format!("{}{identity}", self.prefix);
        let value: Option<String> = conn.get(full_key).await?;
        // A value that doesn't parse is treated as absent rather than fatal.
        Ok(value.and_then(|v| v.parse().ok()))
    }

    async fn record_submission_ms(
        &self,
        identity: &str,
        timestamp_ms: i64,
        retention_secs: u64,
    ) -> anyhow::Result<()> {
        let mut conn = self.redis.connection();
        let full_key = format!("{}{identity}", self.prefix);
        let _: () = conn.set_ex(full_key, timestamp_ms.to_string(), retention_secs).await?;
        Ok(())
    }
}
