//! Repository for the `forums` table.

use forum_core::post_query::Direction;
use sqlx::PgPool;

use crate::models::forum::{CreateForum, Forum};
use crate::models::user::User;
use crate::repositories::user_repo::COLUMNS as USER_COLUMNS;

/// Forum columns plus live thread and post counts. Expects the table
/// aliased as `f`.
const COLUMNS: &str = "f.id, f.slug::TEXT AS slug, f.title, f.author::TEXT AS author, \
     (SELECT COUNT(*) FROM threads t WHERE t.forum = f.slug) AS threads, \
     (SELECT COUNT(*) FROM posts p WHERE p.forum = f.slug) AS posts";

pub struct ForumRepo;

impl ForumRepo {
    /// Insert a new forum owned by `author`, returning the created row.
    ///
    /// `author` should be the nickname as stored, not as typed by the client.
    pub async fn create(
        pool: &PgPool,
        input: &CreateForum,
        author: &str,
    ) -> Result<Forum, sqlx::Error> {
        let query = format!(
            "INSERT INTO forums AS f (slug, title, author)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Forum>(&query)
            .bind(&input.slug)
            .bind(&input.title)
            .bind(author)
            .fetch_one(pool)
            .await
    }

    /// Find a forum by slug, ignoring case.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Forum>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM forums f WHERE f.slug = $1::citext");
        sqlx::query_as::<_, Forum>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// Users who started a thread or wrote a post in `forum`, by nickname.
    ///
    /// `since` is an exclusive nickname bound in the walking direction. A
    /// `None` limit returns every participant.
    pub async fn list_users(
        pool: &PgPool,
        forum: &str,
        since: Option<&str>,
        limit: Option<i64>,
        direction: Direction,
    ) -> Result<Vec<User>, sqlx::Error> {
        let bound = direction.after().as_sql();
        let dir = direction.as_sql();
        let query = format!(
            "SELECT {USER_COLUMNS} FROM users
             WHERE users.nickname IN (
                    SELECT author FROM threads WHERE forum = $1::citext
                    UNION
                    SELECT author FROM posts WHERE forum = $1::citext
                )
               AND ($2::citext IS NULL OR users.nickname {bound} $2::citext)
             ORDER BY users.nickname {dir}
             LIMIT $3"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(forum)
            .bind(since)
            .bind(limit)
            .fetch_all(pool)
            .await
    }
}
