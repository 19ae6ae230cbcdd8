//! Post entity model and DTOs.

use forum_core::types::{DbId, PostId, Timestamp, ROOT_PARENT};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::forum::Forum;
use crate::models::thread::Thread;
use crate::models::user::User;

/// A post row from the `posts` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: PostId,
    pub parent: PostId,
    pub author: String,
    pub message: String,
    pub is_edited: bool,
    pub forum: String,
    #[sqlx(rename = "thread_id")]
    pub thread: DbId,
    pub created: Timestamp,
    /// Materialized path; internal ordering key, never sent to clients.
    #[serde(skip)]
    pub path: String,
}

impl Post {
    pub fn is_root(&self) -> bool {
        self.parent == ROOT_PARENT
    }
}

/// One element of a batch create request.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePost {
    /// `0` or absent for a new root post.
    #[serde(default)]
    pub parent: PostId,
    pub author: String,
    pub message: String,
}

/// A fully resolved post ready to insert: id issued, path derived.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub id: PostId,
    pub parent: PostId,
    pub author: String,
    pub message: String,
    pub forum: String,
    pub thread: DbId,
    pub path: String,
    pub created: Timestamp,
}

/// DTO for editing a post.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePost {
    pub message: Option<String>,
}

/// Post with the related entities requested through `?related=`.
#[derive(Debug, Clone, Serialize)]
pub struct PostDetails {
    pub post: Post,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forum: Option<Forum>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thread: Option<Thread>,
}

/// Where an existing post sits: its thread and path. Used to place replies.
#[derive(Debug, Clone, FromRow)]
pub struct PostLocation {
    pub id: PostId,
    pub thread_id: DbId,
    pub path: String,
}
