use anyhow::Context;

pub mod cooldown_repo;

pub use cooldown_repo::RedisCooldownStore;

/// Thin wrapper around a shared Redis connection manager.
///
/// The manager multiplexes one connection and reconnects on its own, so
/// handles are cheap to clone per request.
#[derive(Debug, Clone)]
pub struct RedisClient {
    manager: redis::aio::ConnectionManager,
}

impl RedisClient {
    /// Connects to Redis and starts the connection manager.
    ///
    /// # Errors
    /// Returns an error if the URL is invalid or the initial connection
    /// fails.
    pub async fn connect(url: &str) -> anyhow::Result<Self> {
        let client = redis::Client::open(url).context("invalid redis URL")?;
        let manager = client
            .get_connection_manager()
            .await
            .context("failed to connect to redis")?;
        Ok(Self { manager })
    }

    /// Returns a connection handle for standard Redis commands.
    #[must_use]
    pub fn connection(&self) -> redis::aio::ConnectionManager {
        self.manager.clone()
    }

    /// Pings the Redis server to check connectivity.
    ///
    /// # Errors
    /// Returns an error if the ping fails.
    pub async fn ping(&self) -> anyhow::Result<()> {
        let mut conn = self.connection();
        redis::cmd("PING").query_async::<String>(&mut conn).await?;
        Ok(())
    }
}
