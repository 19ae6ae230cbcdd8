//! Thread traversal engine.
//!
//! Produces a page of a thread's posts in one of three orders:
//!
//! - **flat**: `(created, id)`; `since` bounds by id.
//! - **tree**: full pre-order by path; `since` bounds by the since-post's path.
//! - **parent_tree**: root posts by id, each immediately followed by its whole
//!   subtree in ascending path order. `limit` counts roots only, so a page can
//!   hold more than `limit` posts. `since` bounds by the root-ancestor key of
//!   the since-post, so resuming from a nested reply skips the rest of its
//!   root's subtree.
//!
//! A `since` id that does not exist fails with [`sqlx::Error::RowNotFound`].

use forum_core::post_path::root_ancestor_key;
use forum_core::post_query::{Direction, PostFilter, PostOrder, PostQuery, PostSort};
use forum_core::types::{DbId, PostId};

use crate::models::post::Post;
use crate::store::PostStore;

/// One page request against a thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraversalRequest {
    pub thread: DbId,
    pub sort: PostSort,
    /// `None` reads to the end.
    pub limit: Option<i64>,
    pub since: Option<PostId>,
    pub direction: Direction,
}

impl TraversalRequest {
    /// First page of `thread` in ascending order with no limit.
    pub fn new(thread: DbId, sort: PostSort) -> Self {
        Self {
            thread,
            sort,
            limit: None,
            since: None,
            direction: Direction::Asc,
        }
    }
}

pub struct ThreadTraversal<'a, S: ?Sized> {
    store: &'a S,
}

impl<'a, S: PostStore + ?Sized> ThreadTraversal<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Dispatch on `request.sort`.
    pub async fn posts(&self, request: &TraversalRequest) -> Result<Vec<Post>, sqlx::Error> {
        tracing::debug!(
            thread_id = request.thread,
            sort = %request.sort,
            limit = ?request.limit,
            since = ?request.since,
            direction = request.direction.as_sql(),
            "Reading thread posts",
        );
        match request.sort {
            PostSort::Flat => self.flat(request).await,
            PostSort::Tree => self.tree(request).await,
            PostSort::ParentTree => self.parent_tree(request).await,
        }
    }

    pub async fn flat(&self, request: &TraversalRequest) -> Result<Vec<Post>, sqlx::Error> {
        let mut query = PostQuery::in_thread(request.thread)
            .order_by(PostOrder::Created, request.direction)
            .limit(request.limit);
        if let Some(since) = request.since {
            query = query.filter(PostFilter::Id(request.direction.after(), since));
        }
        self.store.select(&query).await
    }

    pub async fn tree(&self, request: &TraversalRequest) -> Result<Vec<Post>, sqlx::Error> {
        let mut query = PostQuery::in_thread(request.thread)
            .order_by(PostOrder::Path, request.direction)
            .limit(request.limit);
        if let Some(since) = request.since {
            let path = self.since_path(since).await?;
            query = query.filter(PostFilter::Path(request.direction.after(), path));
        }
        self.store.select(&query).await
    }

    pub async fn parent_tree(&self, request: &TraversalRequest) -> Result<Vec<Post>, sqlx::Error> {
        let mut roots_query = PostQuery::in_thread(request.thread)
            .filter(PostFilter::RootsOnly)
            .order_by(PostOrder::Id, request.direction)
            .limit(request.limit);
        if let Some(since) = request.since {
            let key = root_ancestor_key(&self.since_path(since).await?);
            roots_query = roots_query.filter(PostFilter::Path(request.direction.after(), key));
        }

        let roots = self.store.select(&roots_query).await?;
        let mut page = Vec::with_capacity(roots.len());
        for root in roots {
            // Subtrees always read top-down, whatever the root direction.
            let subtree_query = PostQuery::in_thread(request.thread)
                .filter(PostFilter::Descendants(root.path.clone()))
                .order_by(PostOrder::Path, Direction::Asc);
            let subtree = self.store.select(&subtree_query).await?;
            page.push(root);
            page.extend(subtree);
        }
        Ok(page)
    }

    async fn since_path(&self, since: PostId) -> Result<String, sqlx::Error> {
        self.store
            .path_of(since)
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }
}
