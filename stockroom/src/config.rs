use std::time::Duration;

use stockroom_db::DbOptions;

#[derive(Debug, Clone, clap::Parser)]
#[clap(about, version, name = "stockroom")]
pub(crate) struct Config {
    /// Connection string for the inventory/sales database, e.g. `postgres://...` or `sqlite://stockroom.db?mode=rwc`
    #[clap(long, env = "DATABASE_URL")]
    pub(crate) database_url: String,

    #[clap(long, env = "PORT", default_value_t = 8080)]
    pub(crate) port: u16,

    /// Port the Prometheus `/metrics` listener binds to
    #[clap(long, env = "METRICS_PORT", default_value_t = 9091)]
    pub(crate) metrics_port: u16,

    #[clap(long, env = "DB_MAX_CONNECTIONS", default_value_t = 20)]
    pub(crate) max_connections: u32,

    /// Deadline for every storage call, in milliseconds
    #[clap(long, env = "QUERY_TIMEOUT_MS", default_value_t = 5_000)]
    pub(crate) query_timeout_ms: u64,
}

impl Config {
    pub(crate) fn db_options(&self) -> DbOptions {
        DbOptions {
            url: self.database_url.clone(),
            max_connections: self.max_connections,
            query_timeout: Duration::from_millis(self.query_timeout_ms),
        }
    }
}
