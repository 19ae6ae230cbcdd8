//! User entity model and DTOs.

use forum_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A user row from the `users` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    #[serde(skip_serializing)]
    pub id: DbId,
    pub nickname: String,
    pub fullname: String,
    pub about: String,
    pub email: String,
}

/// DTO for creating a user. The nickname comes from the URL.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUser {
    pub fullname: String,
    #[serde(default)]
    pub about: String,
    pub email: String,
}

/// DTO for a profile update. Missing or empty fields keep their value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateUser {
    pub fullname: Option<String>,
    pub about: Option<String>,
    pub email: Option<String>,
}
