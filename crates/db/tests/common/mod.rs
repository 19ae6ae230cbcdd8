//! Shared helpers for forum-db integration tests.

#![allow(dead_code)]

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{Duration, TimeZone, Utc};
use forum_core::id_gen::PostIdGenerator;
use forum_core::post_batch::{place_batch, KnownParent};
use forum_core::post_path::is_descendant;
use forum_core::post_query::{Direction, PostFilter, PostOrder, PostQuery};
use forum_core::types::{DbId, PostId, Timestamp};
use forum_db::models::post::Post;
use forum_db::store::PostStore;

// ---------------------------------------------------------------------------
// In-memory store
// ---------------------------------------------------------------------------

/// [`PostStore`] over a plain vector, evaluating [`PostQuery`] the way the
/// PostgreSQL store does: byte order on paths, `(created, id)` for creation
/// order.
#[derive(Debug, Default)]
pub struct MemoryPostStore {
    pub posts: Vec<Post>,
}

fn matches(filter: &PostFilter, post: &Post) -> bool {
    match filter {
        PostFilter::Thread(thread) => post.thread == *thread,
        PostFilter::Id(cmp, id) => cmp.holds(&post.id, id),
        PostFilter::Path(cmp, path) => cmp.holds(post.path.as_str(), path.as_str()),
        PostFilter::RootsOnly => post.is_root(),
        PostFilter::Descendants(ancestor) => is_descendant(ancestor, &post.path),
    }
}

#[async_trait]
impl PostStore for MemoryPostStore {
    async fn path_of(&self, id: PostId) -> Result<Option<String>, sqlx::Error> {
        Ok(self
            .posts
            .iter()
            .find(|p| p.id == id)
            .map(|p| p.path.clone()))
    }

    async fn select(&self, query: &PostQuery) -> Result<Vec<Post>, sqlx::Error> {
        let mut rows: Vec<Post> = self
            .posts
            .iter()
            .filter(|p| query.filters.iter().all(|f| matches(f, p)))
            .cloned()
            .collect();

        rows.sort_by(|a, b| match query.order {
            PostOrder::Created => (a.created, a.id).cmp(&(b.created, b.id)),
            PostOrder::Path => a.path.cmp(&b.path),
            PostOrder::Id => a.id.cmp(&b.id),
        });
        if query.direction == Direction::Desc {
            rows.reverse();
        }
        if let Some(limit) = query.limit {
            rows.truncate(usize::try_from(limit).unwrap_or(0));
        }
        Ok(rows)
    }
}

// ---------------------------------------------------------------------------
// Forest builder
// ---------------------------------------------------------------------------

/// Builds reply forests through the same id and path assignment the service
/// uses. Each batch shares one timestamp, one second after the previous.
pub struct Forest {
    ids: PostIdGenerator,
    clock: Timestamp,
    pub store: MemoryPostStore,
}

impl Default for Forest {
    fn default() -> Self {
        Self::new()
    }
}

impl Forest {
    pub fn new() -> Self {
        Self {
            ids: PostIdGenerator::new(),
            clock: Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, 0).unwrap(),
            store: MemoryPostStore::default(),
        }
    }

    /// Create one post per entry of `parents` in `thread`, returning the ids.
    pub fn batch(&mut self, thread: DbId, parents: &[PostId]) -> Vec<PostId> {
        let known: HashMap<PostId, KnownParent> = self
            .store
            .posts
            .iter()
            .filter(|p| parents.contains(&p.id))
            .map(|p| {
                (
                    p.id,
                    KnownParent {
                        thread: p.thread,
                        path: p.path.clone(),
                    },
                )
            })
            .collect();
        let placed = place_batch(thread, parents, &known, &self.ids).unwrap();

        self.clock += Duration::seconds(1);
        placed
            .into_iter()
            .map(|placement| {
                self.store.posts.push(Post {
                    id: placement.id,
                    parent: placement.parent,
                    author: "tester".into(),
                    message: format!("post {}", placement.id),
                    is_edited: false,
                    forum: "forum".into(),
                    thread,
                    created: self.clock,
                    path: placement.path,
                });
                placement.id
            })
            .collect()
    }

    /// Create a single post.
    pub fn post(&mut self, thread: DbId, parent: PostId) -> PostId {
        self.batch(thread, &[parent])[0]
    }

    /// Ids of `thread` in reply-tree pre-order, siblings by id.
    pub fn preorder(&self, thread: DbId) -> Vec<PostId> {
        let mut out = Vec::new();
        self.visit(thread, 0, &mut out);
        out
    }

    fn visit(&self, thread: DbId, parent: PostId, out: &mut Vec<PostId>) {
        let mut children: Vec<PostId> = self
            .store
            .posts
            .iter()
            .filter(|p| p.thread == thread && p.parent == parent)
            .map(|p| p.id)
            .collect();
        children.sort_unstable();
        for child in children {
            out.push(child);
            self.visit(thread, child, out);
        }
    }
}

pub fn ids(posts: &[Post]) -> Vec<PostId> {
    posts.iter().map(|p| p.id).collect()
}
