//! Read access to a thread's posts.
//!
//! [`PostStore`] is the seam between the traversal engine and storage. The
//! engine only ever asks two things: the path of one post, and the posts
//! matching a [`PostQuery`]. [`PgPostStore`] answers both with parameterized
//! SQL; tests substitute an in-memory store.

use async_trait::async_trait;
use forum_core::post_path::subtree_end;
use forum_core::post_query::{PostFilter, PostOrder, PostQuery};
use forum_core::types::PostId;
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::models::post::Post;
use crate::repositories::post_repo::COLUMNS;

#[async_trait]
pub trait PostStore: Send + Sync {
    /// Stored path of a post, `None` if it does not exist.
    async fn path_of(&self, id: PostId) -> Result<Option<String>, sqlx::Error>;

    /// Posts matching every filter, ordered and limited as requested.
    async fn select(&self, query: &PostQuery) -> Result<Vec<Post>, sqlx::Error>;
}

/// [`PostStore`] over the `posts` table.
#[derive(Debug, Clone)]
pub struct PgPostStore {
    pool: PgPool,
}

impl PgPostStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Compile a [`PostQuery`] into a bound `SELECT`.
///
/// Only fixed keywords are pushed as text; every value goes through
/// `push_bind`.
pub fn build_select(query: &PostQuery) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::new(format!("SELECT {COLUMNS} FROM posts WHERE TRUE"));

    for filter in &query.filters {
        match filter {
            PostFilter::Thread(thread) => {
                qb.push(" AND thread_id = ").push_bind(*thread);
            }
            PostFilter::Id(cmp, id) => {
                qb.push(" AND id ").push(cmp.as_sql()).push(" ").push_bind(*id);
            }
            PostFilter::Path(cmp, path) => {
                qb.push(" AND path ")
                    .push(cmp.as_sql())
                    .push(" ")
                    .push_bind(path.clone());
            }
            PostFilter::RootsOnly => {
                qb.push(" AND parent = 0");
            }
            PostFilter::Descendants(ancestor) => {
                qb.push(" AND path > ")
                    .push_bind(ancestor.clone())
                    .push(" AND path < ")
                    .push_bind(subtree_end(ancestor));
            }
        }
    }

    let dir = query.direction.as_sql();
    match query.order {
        PostOrder::Created => qb.push(format_args!(" ORDER BY created {dir}, id {dir}")),
        PostOrder::Path => qb.push(format_args!(" ORDER BY path {dir}")),
        PostOrder::Id => qb.push(format_args!(" ORDER BY id {dir}")),
    };

    if let Some(limit) = query.limit {
        qb.push(" LIMIT ").push_bind(limit);
    }
    qb
}

#[async_trait]
impl PostStore for PgPostStore {
    async fn path_of(&self, id: PostId) -> Result<Option<String>, sqlx::Error> {
        sqlx::query_scalar("SELECT path FROM posts WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn select(&self, query: &PostQuery) -> Result<Vec<Post>, sqlx::Error> {
        let mut qb = build_select(query);
        qb.build_query_as::<Post>().fetch_all(&self.pool).await
    }
}
