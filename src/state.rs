use crate::config::AppConfig;
use crate::db;
use sqlx::SqlitePool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);
        let db = db::connect(&config.database_url, config.db_max_connections).await?;
        db::ensure_schema(&db).await;
        Ok(Self::from_parts(db, config))
    }

    pub fn from_parts(db: SqlitePool, config: Arc<AppConfig>) -> Self {
        Self { db, config }
    }

    /// In-memory store with the schema applied.
    /// One connection, so every handle sees the same database.
    #[cfg(test)]
    pub async fn in_memory() -> Self {
        let db = sqlx::sqlite::SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("in-memory sqlite");
        db::ensure_schema(&db).await;

        let config = Arc::new(AppConfig::from_lookup(|key| match key {
            "DATABASE_URL" => Some("sqlite::memory:".into()),
            _ => None,
        }));
        Self::from_parts(db, config)
    }
}
