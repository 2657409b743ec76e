//! Store initialization: connection pool and schema migration.

use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;

/// Embedded schema migrations from `./migrations`.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// How long a connection waits on a locked database before failing.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Pool settings for [`connect`].
#[derive(Debug, Clone)]
pub struct StoreOptions {
    pub database_url: String,
    pub max_connections: u32,
    pub connect_timeout: Duration,
}

/// Opens the SQLite database (creating the file if needed) and applies
/// pending migrations.
///
/// A failure here is fatal for the service: callers should abort startup.
///
/// # Errors
///
/// Returns an error if the URL is invalid, the file cannot be opened, or a
/// migration fails.
pub async fn connect(options: &StoreOptions) -> anyhow::Result<SqlitePool> {
    let connect_options = SqliteConnectOptions::from_str(&options.database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .foreign_keys(true)
        .busy_timeout(BUSY_TIMEOUT);

    let pool = SqlitePoolOptions::new()
        .max_connections(options.max_connections)
        .acquire_timeout(options.connect_timeout)
        .connect_with(connect_options)
        .await?;

    MIGRATOR.run(&pool).await?;

    tracing::info!(
        max_connections = options.max_connections,
        "Store ready, schema up to date"
    );

    Ok(pool)
}

/// Runs a trivial query to confirm the store is reachable.
///
/// # Errors
///
/// Returns the underlying database error.
pub async fn ping(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
