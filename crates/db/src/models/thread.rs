//! Thread entity model and DTOs.

use forum_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A thread row from the `threads` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Thread {
    pub id: DbId,
    pub title: String,
    pub author: String,
    pub forum: String,
    pub message: String,
    pub votes: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    pub created: Timestamp,
}

/// DTO for creating a thread. The forum comes from the URL.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateThread {
    pub title: String,
    pub author: String,
    pub message: String,
    pub slug: Option<String>,
    /// Defaults to the insert time.
    pub created: Option<Timestamp>,
}

/// DTO for updating a thread. Missing or empty fields stay unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateThread {
    pub title: Option<String>,
    pub message: Option<String>,
}
