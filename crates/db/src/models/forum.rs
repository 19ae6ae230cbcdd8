//! Forum entity model and DTOs.

use forum_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A forum row with its thread and post counts.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Forum {
    #[serde(skip_serializing)]
    pub id: DbId,
    pub slug: String,
    pub title: String,
    /// Nickname of the creator, in its stored case.
    #[serde(rename = "user")]
    pub author: String,
    pub threads: i64,
    pub posts: i64,
}

/// DTO for creating a forum.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateForum {
    pub title: String,
    pub user: String,
    pub slug: String,
}
