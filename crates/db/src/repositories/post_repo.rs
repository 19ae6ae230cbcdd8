//! Repository for the `posts` table.
//!
//! Thread listings do not live here; they go through
//! [`crate::store::PostStore`] and [`crate::traversal`].

use forum_core::types::PostId;
use sqlx::PgPool;

use crate::models::post::{NewPost, Post, PostLocation};

/// Column list shared with [`crate::store::PgPostStore`].
pub(crate) const COLUMNS: &str = "id, parent, author::TEXT AS author, message, is_edited, \
     forum::TEXT AS forum, thread_id, created, path";

pub struct PostRepo;

impl PostRepo {
    pub async fn find_by_id(pool: &PgPool, id: PostId) -> Result<Option<Post>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM posts WHERE id = $1");
        sqlx::query_as::<_, Post>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Thread and path of each listed post that exists.
    pub async fn find_locations(
        pool: &PgPool,
        ids: &[PostId],
    ) -> Result<Vec<PostLocation>, sqlx::Error> {
        sqlx::query_as::<_, PostLocation>(
            "SELECT id, thread_id, path FROM posts WHERE id = ANY($1)",
        )
        .bind(ids)
        .fetch_all(pool)
        .await
    }

    /// Highest post id in the store, `0` when empty.
    pub async fn max_id(pool: &PgPool) -> Result<PostId, sqlx::Error> {
        sqlx::query_scalar("SELECT COALESCE(MAX(id), 0)::BIGINT FROM posts")
            .fetch_one(pool)
            .await
    }

    /// Insert every post of a batch in one transaction.
    ///
    /// Rows come back in input order. Any failure rolls back the whole batch.
    pub async fn insert_batch(pool: &PgPool, posts: &[NewPost]) -> Result<Vec<Post>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let mut created = Vec::with_capacity(posts.len());
        for post in posts {
            created.push(Self::insert_inner(&mut tx, post).await?);
        }
        tx.commit().await?;
        Ok(created)
    }

    /// Replace a post's message.
    ///
    /// `is_edited` is raised only when the new message differs from the
    /// stored one. Returns `None` if no row with the given `id` exists.
    pub async fn update_message(
        pool: &PgPool,
        id: PostId,
        message: &str,
    ) -> Result<Option<Post>, sqlx::Error> {
        let query = format!(
            "UPDATE posts SET
                is_edited = is_edited OR message <> $2,
                message = $2
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Post>(&query)
            .bind(id)
            .bind(message)
            .fetch_optional(pool)
            .await
    }

    // -----------------------------------------------------------------------
    // Internal helpers
    // -----------------------------------------------------------------------

    /// Insert one post within an existing transaction.
    ///
    /// A reused id surfaces as a `posts_pkey` unique violation.
    async fn insert_inner(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        post: &NewPost,
    ) -> Result<Post, sqlx::Error> {
        let query = format!(
            "INSERT INTO posts (id, parent, author, message, forum, thread_id, path, created)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Post>(&query)
            .bind(post.id)
            .bind(post.parent)
            .bind(&post.author)
            .bind(&post.message)
            .bind(&post.forum)
            .bind(post.thread)
            .bind(&post.path)
            .bind(post.created)
            .fetch_one(&mut **tx)
            .await
    }
}
