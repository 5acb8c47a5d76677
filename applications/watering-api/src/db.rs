use crate::config::DatabaseConfig;
use crate::error::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;

pub type DbPool = Pool<Sqlite>;

/// Number of pots in the deployed installation.
pub const DEPLOYED_POT_COUNT: usize = 2;

pub async fn create_pool(config: &DatabaseConfig) -> Result<DbPool> {
    let options = SqliteConnectOptions::from_str(&config.url)?.create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_with(options)
        .await?;

    Ok(pool)
}

/// Creates the plant, pot and telemetry tables when they are missing.
pub async fn ensure_schema(pool: &DbPool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS plants (
            name              TEXT PRIMARY KEY NOT NULL,
            ideal_temperature REAL NOT NULL,
            ideal_humidity    REAL NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    // AUTOINCREMENT keeps ids from being reused after a row is removed by hand.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS pots (
            id                 INTEGER PRIMARY KEY AUTOINCREMENT,
            plant_name         TEXT,
            pump_on            INTEGER NOT NULL DEFAULT 0,
            pump_duration_secs INTEGER NOT NULL DEFAULT 0,
            active             INTEGER NOT NULL DEFAULT 0,
            last_pumped_at     TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS telemetry (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            plant_name   TEXT,
            humidity     REAL NOT NULL,
            temperature  REAL NOT NULL,
            pot_id       INTEGER NOT NULL,
            recorded_at  TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// Inserts the deployed pots when the pot table is empty.
///
/// Returns the number of pots inserted.
pub async fn seed_pots(pool: &DbPool) -> Result<usize> {
    let (existing,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM pots")
        .fetch_one(pool)
        .await?;

    if existing > 0 {
        return Ok(0);
    }

    for _ in 0..DEPLOYED_POT_COUNT {
        sqlx::query("INSERT INTO pots (plant_name, pump_on, pump_duration_secs, active) VALUES (NULL, 0, 0, 0)")
            .execute(pool)
            .await?;
    }

    Ok(DEPLOYED_POT_COUNT)
}

/// Check database connectivity and pot table existence
pub async fn health_check(pool: &DbPool) -> Result<(bool, bool)> {
    sqlx::query("SELECT 1").execute(pool).await?;

    let (tables,): (i64,) = sqlx::query_as(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'pots'",
    )
    .fetch_one(pool)
    .await?;

    Ok((true, tables > 0))
}
