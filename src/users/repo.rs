use sqlx::{Executor, Sqlite, SqlitePool};

use crate::error::StoreError;
use crate::users::dto::{NewUser, UpdateUser};
use crate::users::repo_types::User;

async fn fetch_user<'e, E>(executor: E, user_id: i64) -> Result<Option<User>, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query_as::<_, User>(
        r#"
        SELECT user_id, name, email, phone, address, country
          FROM users
         WHERE user_id = ?
        "#,
    )
    .bind(user_id)
    .fetch_optional(executor)
    .await
}

/// Every user, in storage order.
pub async fn list_users(db: &SqlitePool) -> Result<Vec<User>, StoreError> {
    let rows = sqlx::query_as::<_, User>(
        r#"
        SELECT user_id, name, email, phone, address, country
          FROM users
         ORDER BY user_id
        "#,
    )
    .fetch_all(db)
    .await?;
    Ok(rows)
}

pub async fn get_user(db: &SqlitePool, user_id: i64) -> Result<User, StoreError> {
    fetch_user(db, user_id).await?.ok_or(StoreError::NotFound)
}

/// Insert and read the row back by its generated id. Both run in one transaction,
/// which is rolled back when dropped uncommitted on any error path.
pub async fn insert_user(db: &SqlitePool, user: &NewUser) -> Result<User, StoreError> {
    let mut tx = db.begin().await?;

    let user_id = sqlx::query(
        r#"
        INSERT INTO users (name, email, phone, address, country)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(&user.name)
    .bind(&user.email)
    .bind(&user.phone)
    .bind(&user.address)
    .bind(&user.country)
    .execute(&mut *tx)
    .await?
    .last_insert_rowid();

    let created = fetch_user(&mut *tx, user_id)
        .await?
        .ok_or(StoreError::NotFound)?;

    tx.commit().await?;
    Ok(created)
}

pub async fn update_user(db: &SqlitePool, user: &UpdateUser) -> Result<User, StoreError> {
    let mut tx = db.begin().await?;

    let affected = sqlx::query(
        r#"
        UPDATE users
           SET name = ?, email = ?, phone = ?, address = ?, country = ?
         WHERE user_id = ?
        "#,
    )
    .bind(&user.name)
    .bind(&user.email)
    .bind(&user.phone)
    .bind(&user.address)
    .bind(&user.country)
    .bind(user.user_id)
    .execute(&mut *tx)
    .await?
    .rows_affected();

    if affected == 0 {
        return Err(StoreError::NotFound);
    }

    let updated = fetch_user(&mut *tx, user.user_id)
        .await?
        .ok_or(StoreError::NotFound)?;

    tx.commit().await?;
    Ok(updated)
}

pub async fn delete_user(db: &SqlitePool, user_id: i64) -> Result<(), StoreError> {
    let affected = sqlx::query("DELETE FROM users WHERE user_id = ?")
        .bind(user_id)
        .execute(db)
        .await?
        .rows_affected();

    if affected == 0 {
        return Err(StoreError::NotFound);
    }
    Ok(())
}
