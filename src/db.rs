use std::str::FromStr;

use anyhow::Context;
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    SqlitePool,
};

pub async fn connect(database_url: &str, max_connections: u32) -> anyhow::Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)
        .with_context(|| format!("parse database url {database_url}"))?
        .create_if_missing(true);

    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
        .context("connect to database")
}

/// Creates the `users` table if it is absent. Failures are logged, never returned.
pub async fn ensure_schema(db: &SqlitePool) {
    let res = sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            user_id INTEGER PRIMARY KEY NOT NULL,
            name    TEXT NOT NULL,
            email   TEXT NOT NULL,
            phone   TEXT NOT NULL,
            address TEXT NOT NULL,
            country TEXT NOT NULL
        )
        "#,
    )
    .execute(db)
    .await;

    match res {
        Ok(_) => tracing::info!("users table ready"),
        Err(e) => tracing::warn!(error = %e, "users table creation failed; continuing"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn ensure_schema_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}", dir.path().join("users.db").display());
        let db = connect(&url, 1).await.unwrap();

        ensure_schema(&db).await;
        ensure_schema(&db).await;

        let (count,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'users'",
        )
        .fetch_one(&db)
        .await
        .unwrap();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn connect_creates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fresh.db");
        assert!(!path.exists());

        let db = connect(&format!("sqlite://{}", path.display()), 1).await.unwrap();
        ensure_schema(&db).await;
        db.close().await;

        assert!(path.exists());
    }

    #[tokio::test]
    async fn records_survive_reopening_the_file() {
        use crate::users::{dto::NewUser, repo};

        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}", dir.path().join("users.db").display());

        let db = connect(&url, 2).await.unwrap();
        ensure_schema(&db).await;
        let created = repo::insert_user(
            &db,
            &NewUser {
                name: "Grace".into(),
                email: "grace@navy.mil".into(),
                phone: "7".into(),
                address: "Arlington".into(),
                country: "US".into(),
            },
        )
        .await
        .unwrap();
        db.close().await;

        let reopened = connect(&url, 2).await.unwrap();
        ensure_schema(&reopened).await;
        let fetched = repo::get_user(&reopened, created.user_id).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn ensure_schema_swallows_errors() {
        let db = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        db.close().await;

        // closed pool: the error is logged and the call still returns
        ensure_schema(&db).await;
    }
}
