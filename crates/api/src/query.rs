//! Shared query parameter types for API handlers.

use forum_core::types::{PostId, Timestamp};
use serde::Deserialize;

/// `GET /thread/{slug_or_id}/posts?sort=&limit=&since=&desc=`.
///
/// `sort` stays a string so an unknown value surfaces as a validation error
/// with the offending keyword, not a generic query rejection.
#[derive(Debug, Default, Deserialize)]
pub struct ThreadPostsParams {
    pub sort: Option<String>,
    pub limit: Option<i64>,
    pub since: Option<PostId>,
    #[serde(default)]
    pub desc: bool,
}

/// `GET /forum/{slug}/threads?limit=&since=&desc=`.
#[derive(Debug, Default, Deserialize)]
pub struct ThreadListParams {
    pub limit: Option<i64>,
    pub since: Option<Timestamp>,
    #[serde(default)]
    pub desc: bool,
}

/// `GET /forum/{slug}/users?limit=&since=&desc=`. `since` is a nickname.
#[derive(Debug, Default, Deserialize)]
pub struct ForumUsersParams {
    pub limit: Option<i64>,
    pub since: Option<String>,
    #[serde(default)]
    pub desc: bool,
}

/// `GET /post/{id}/details?related=user,forum,thread`.
#[derive(Debug, Default, Deserialize)]
pub struct RelatedParams {
    pub related: Option<String>,
}

impl RelatedParams {
    pub fn includes(&self, name: &str) -> bool {
        self.related
            .as_deref()
            .is_some_and(|list| list.split(',').any(|item| item.trim() == name))
    }
}
