mod common_type_conversions;
pub mod entity;
mod error;
mod inventory;
mod reports;
mod sales;

pub use error::StoreError;

pub use sea_orm::DbErr as SeaDbErr;

use std::{future::Future, time::Duration};

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

/// Most documents any listing query hands back.
pub const PAGE_CAP: u64 = 100;

#[derive(Clone, Debug)]
pub struct DbOptions {
    pub url: String,
    pub max_connections: u32,
    /// Deadline applied to every storage call made through [`StockroomDb`].
    pub query_timeout: Duration,
}

impl DbOptions {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 20,
            query_timeout: Duration::from_secs(5),
        }
    }
}

/// Handle to the `inventory` and `sales` tables. Cheap to clone, built once at start-up.
#[derive(Clone, Debug)]
pub struct StockroomDb {
    db: DatabaseConnection,
    query_timeout: Duration,
}

impl StockroomDb {
    pub async fn connect(options: DbOptions) -> Result<Self, StoreError> {
        let DbOptions {
            url,
            max_connections,
            query_timeout,
        } = options;
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(max_connections)
            .min_connections(1)
            .connect_timeout(query_timeout)
            .acquire_timeout(query_timeout)
            .sqlx_logging(false);
        let db: DatabaseConnection = Database::connect(opt).await?;
        Migrator::up(&db, None).await?;
        info!("database connected & migrations applied");

        Ok(Self { db, query_timeout })
    }

    /// Runs a storage future under the configured deadline.
    pub(crate) async fn deadline<T, E, F>(&self, query: F) -> Result<T, StoreError>
    where
        F: Future<Output = Result<T, E>>,
        StoreError: From<E>,
    {
        Ok(tokio::time::timeout(self.query_timeout, query).await??)
    }
}

#[cfg(test)]
pub(crate) async fn test_db() -> StockroomDb {
    // a single connection keeps every query on the same in-memory database
    StockroomDb::connect(DbOptions {
        max_connections: 1,
        ..DbOptions::new("sqlite::memory:")
    })
    .await
    .expect("in-memory sqlite should migrate")
}

/// File-backed database behind a pool of `max_connections`, so transactions really
/// run side by side. The directory has to outlive the handle.
#[cfg(test)]
pub(crate) async fn pooled_test_db(max_connections: u32) -> (tempfile::TempDir, StockroomDb) {
    let dir = tempfile::Builder::new()
        .prefix("stockroom-db")
        .tempdir()
        .expect("temp dir");
    let url = format!("sqlite://{}?mode=rwc", dir.path().join("stockroom.db").display());
    let db = StockroomDb::connect(DbOptions {
        max_connections,
        ..DbOptions::new(url)
    })
    .await
    .expect("file sqlite should migrate");
    (dir, db)
}
