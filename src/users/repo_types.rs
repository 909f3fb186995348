use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// User record in the database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub user_id: i64, // assigned by the store
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub country: String,
}
