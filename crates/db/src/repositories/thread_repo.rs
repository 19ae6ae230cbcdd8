//! Repository for the `threads` table.

use forum_core::post_query::Direction;
use forum_core::thread_ref::ThreadRef;
use forum_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::thread::{CreateThread, Thread, UpdateThread};

pub(crate) const COLUMNS: &str = "id, title, author::TEXT AS author, forum::TEXT AS forum, message, votes, \
     slug::TEXT AS slug, created";

pub struct ThreadRepo;

impl ThreadRepo {
    /// Insert a new thread in `forum`, returning the created row.
    ///
    /// `forum` must be the slug as stored. `created` defaults to now.
    pub async fn create(
        pool: &PgPool,
        forum: &str,
        input: &CreateThread,
    ) -> Result<Thread, sqlx::Error> {
        let query = format!(
            "INSERT INTO threads (slug, title, author, forum, message, created)
             VALUES (NULLIF($1, ''), $2, $3, $4, $5, COALESCE($6, NOW()))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Thread>(&query)
            .bind(&input.slug)
            .bind(&input.title)
            .bind(&input.author)
            .bind(forum)
            .bind(&input.message)
            .bind(input.created)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Thread>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM threads WHERE id = $1");
        sqlx::query_as::<_, Thread>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a thread by slug, ignoring case.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Thread>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM threads WHERE slug = $1::citext");
        sqlx::query_as::<_, Thread>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// Resolve a URL thread reference (numeric id or slug).
    pub async fn find(pool: &PgPool, thread: &ThreadRef) -> Result<Option<Thread>, sqlx::Error> {
        match thread {
            ThreadRef::Id(id) => Self::find_by_id(pool, *id).await,
            ThreadRef::Slug(slug) => Self::find_by_slug(pool, slug).await,
        }
    }

    /// Threads of a forum ordered by `created`.
    ///
    /// `since` is an inclusive bound in the walking direction. A `None`
    /// limit returns every thread.
    pub async fn list_by_forum(
        pool: &PgPool,
        forum: &str,
        since: Option<Timestamp>,
        limit: Option<i64>,
        direction: Direction,
    ) -> Result<Vec<Thread>, sqlx::Error> {
        let bound = match direction {
            Direction::Asc => ">=",
            Direction::Desc => "<=",
        };
        let dir = direction.as_sql();
        let query = format!(
            "SELECT {COLUMNS} FROM threads
             WHERE forum = $1::citext AND ($2::TIMESTAMPTZ IS NULL OR created {bound} $2)
             ORDER BY created {dir}, id {dir}
             LIMIT $3"
        );
        sqlx::query_as::<_, Thread>(&query)
            .bind(forum)
            .bind(since)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Update title and message. Missing or empty fields keep their value.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateThread,
    ) -> Result<Option<Thread>, sqlx::Error> {
        let query = format!(
            "UPDATE threads SET
                title = COALESCE(NULLIF($2, ''), title),
                message = COALESCE(NULLIF($3, ''), message)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Thread>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.message)
            .fetch_optional(pool)
            .await
    }
}
