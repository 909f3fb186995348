use serde::{Deserialize, Serialize};

pub const DELETED: &str = "User deleted successfully";
pub const NOT_DELETED: &str = "Cannot delete user";

/// Request body for `POST /api/users/add`.
#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub country: String,
}

/// Request body for `PUT /api/users/update`. Every field is required.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateUser {
    pub user_id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub country: String,
}

/// Response for `DELETE /api/users/delete/{id}`.
#[derive(Debug, Serialize)]
pub struct DeleteStatus {
    pub status: &'static str,
}

impl DeleteStatus {
    pub fn deleted() -> Self {
        Self { status: DELETED }
    }

    pub fn not_deleted() -> Self {
        Self { status: NOT_DELETED }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_requires_user_id() {
        let err = serde_json::from_str::<UpdateUser>(
            r#"{"name":"a","email":"b","phone":"c","address":"d","country":"e"}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("user_id"));
    }

    #[test]
    fn new_user_ignores_extra_fields() {
        let u: NewUser = serde_json::from_str(
            r#"{"user_id":9,"name":"a","email":"b","phone":"c","address":"d","country":"e"}"#,
        )
        .unwrap();
        assert_eq!(u.name, "a");
        assert_eq!(u.country, "e");
    }

    #[test]
    fn delete_status_serialization() {
        let json = serde_json::to_string(&DeleteStatus::deleted()).unwrap();
        assert_eq!(json, r#"{"status":"User deleted successfully"}"#);
    }
}
