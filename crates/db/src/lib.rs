//! Persistence for knitnote: a single `Projects` table in SQLite.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::SqlitePool;

/// Schema for the one table the application owns.
///
/// Booleans are stored as `0`/`1` integers; dates as `YYYY-MM-DD` text.
/// Table and column names match databases created by the earlier
/// JavaScript server, so an existing `data.db` can be opened as is.
const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS Projects (
        id          INTEGER PRIMARY KEY AUTOINCREMENT,
        title       TEXT    NOT NULL,
        category    TEXT    NOT NULL,
        craft       TEXT    NOT NULL,
        pattern     TEXT,
        yarn        TEXT,
        startDate   TEXT,
        endDate     TEXT,
        completed   INTEGER NOT NULL DEFAULT 0,
        progress    INTEGER NOT NULL DEFAULT 0,
        created_at  TEXT    NOT NULL DEFAULT CURRENT_TIMESTAMP
    )
";

/// Create a connection pool from a database URL (e.g. `sqlite://data.db`).
///
/// The pool holds exactly one connection, so every statement runs in
/// sequence. The file is created if it does not exist yet.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
}

/// Verify the database answers a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Create the `Projects` table if it is missing. Safe to run on every start.
pub async fn ensure_schema(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query(SCHEMA).execute(pool).await?;
    tracing::debug!("Projects table ready");
    Ok(())
}
