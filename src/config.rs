use clap::{Args, Parser, ValueEnum};

#[derive(Clone, Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Config {
    #[command(flatten)]
    pub server: ServerConfig,

    #[command(flatten)]
    pub store: StoreConfig,

    #[command(flatten)]
    pub tracker: TrackerConfig,

    #[command(flatten)]
    pub cooldown: CooldownConfig,

    #[command(flatten)]
    pub identity: IdentityConfig,

    #[command(flatten)]
    pub health: HealthConfig,

    #[command(flatten)]
    pub telemetry: TelemetryConfig,
}

#[derive(Clone, Debug, Args)]
pub struct ServerConfig {
    /// Host to listen on
    #[arg(long, env = "INTAKE_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "INTAKE_PORT", default_value_t = 8080)]
    pub port: u16,

    /// Port for the management endpoints (livez/readyz)
    #[arg(long, env = "INTAKE_MGMT_PORT", default_value_t = 8081)]
    pub mgmt_port: u16,
}

#[derive(Clone, Debug, Args)]
pub struct StoreConfig {
    /// Redis connection URL for the cooldown store
    #[arg(long, env = "INTAKE_REDIS_URL", default_value = "redis://127.0.0.1:6379")]
    pub redis_url: String,
}

#[derive(Clone, Debug, Args)]
pub struct TrackerConfig {
    /// Issue-creation endpoint of the external tracker,
    /// e.g. https://api.github.com/repos/OWNER/REPO/issues
    #[arg(long, env = "INTAKE_TRACKER_ISSUES_URL")]
    pub issues_url: String,

    /// Bearer token used to authenticate against the tracker
    #[arg(long, env = "INTAKE_TRACKER_TOKEN")]
    pub token: String,
}

#[derive(Clone, Debug, Args)]
pub struct CooldownConfig {
    /// Minimum time a submitter must wait between accepted submissions
    #[arg(long, env = "INTAKE_COOLDOWN_SECS", default_value_t = 300)]
    pub window_secs: u64,

    /// How long a cooldown entry is kept in the store before automatic expiry
    #[arg(long, env = "INTAKE_COOLDOWN_RETENTION_SECS", default_value_t = 3600)]
    pub retention_secs: u64,
}

#[derive(Clone, Debug, Args)]
pub struct IdentityConfig {
    /// Platform-supplied header carrying the client IP, used as the
    /// rate-limit bucket key
    #[arg(long, env = "INTAKE_CLIENT_IP_HEADER", default_value = "cf-connecting-ip")]
    pub client_ip_header: String,
}

#[derive(Clone, Debug, Args)]
pub struct HealthConfig {
    /// Timeout for the cooldown-store readiness probe
    #[arg(long, env = "INTAKE_HEALTH_STORE_TIMEOUT_MS", default_value_t = 2000)]
    pub store_timeout_ms: u64,
}

#[derive(Clone, Debug, Args)]
pub struct TelemetryConfig {
    /// Log output format
    #[arg(long, env = "INTAKE_LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

impl Config {
    #[must_use]
    pub fn load() -> Self {
        Self::parse()
    }
}
