use std::sync::Arc;

use anyhow::Context;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use crate::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let config = Arc::new(AppConfig::from_env()?);
        let db = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&config.database_url)
            .await
            .context("connect to database")?;

        tracing::info!("database connected");
        Ok(Self { db, config })
    }

    /// Assemble state from an already-built pool and config.
    ///
    /// This is the injection point for a harness that substitutes its own
    /// store, e.g. an in-memory database for tests.
    pub fn from_parts(db: SqlitePool, config: Arc<AppConfig>) -> Self {
        Self { db, config }
    }
}

/// Create the users table if it does not exist. Harness-side hook,
/// paired with [`drop_schema`].
pub async fn create_schema(db: &SqlitePool) -> anyhow::Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id                  INTEGER PRIMARY KEY AUTOINCREMENT,
            username            TEXT NOT NULL UNIQUE,
            email               TEXT NOT NULL,
            first_name          TEXT,
            last_name           TEXT,
            roles               TEXT,
            social_provider     TEXT,
            social_id           TEXT UNIQUE,
            profile_picture_url TEXT,
            created_at          TEXT NOT NULL
        )
        "#,
    )
    .execute(db)
    .await
    .context("create users table")?;
    Ok(())
}

/// Drop the users table. Harness-side hook.
pub async fn drop_schema(db: &SqlitePool) -> anyhow::Result<()> {
    sqlx::query("DROP TABLE IF EXISTS users")
        .execute(db)
        .await
        .context("drop users table")?;
    Ok(())
}

/// Check database connectivity by executing a trivial query.
pub async fn ping(db: &SqlitePool) -> anyhow::Result<()> {
    sqlx::query("SELECT 1")
        .execute(db)
        .await
        .context("ping database")?;
    Ok(())
}
