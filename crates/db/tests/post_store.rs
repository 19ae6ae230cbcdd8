//! PostgreSQL post store: the traversal engine over real SQL.
//!
//! Mirrors the in-memory traversal tests on a smaller forest to check that
//! the compiled queries order and bound paths exactly like byte comparison.

use std::collections::HashMap;

use chrono::{Duration, Utc};
use forum_core::id_gen::PostIdGenerator;
use forum_core::post_batch::{place_batch, KnownParent};
use forum_core::post_query::{Direction, PostSort};
use forum_db::models::post::NewPost;
use forum_db::repositories::PostRepo;
use forum_db::store::{PgPostStore, PostStore};
use forum_db::traversal::{ThreadTraversal, TraversalRequest};
use sqlx::PgPool;

async fn seed_thread(pool: &PgPool) -> i64 {
    sqlx::query(
        "INSERT INTO users (nickname, fullname, email) VALUES ('alice', 'Alice', 'a@example.com')",
    )
    .execute(pool)
    .await
    .unwrap();
    sqlx::query("INSERT INTO forums (slug, title, author) VALUES ('f', 'Forum', 'alice')")
        .execute(pool)
        .await
        .unwrap();
    sqlx::query_scalar(
        "INSERT INTO threads (title, author, forum, message) \
         VALUES ('t', 'alice', 'f', 'm') RETURNING id",
    )
    .fetch_one(pool)
    .await
    .unwrap()
}

/// Insert one batch; each batch is one second after the previous.
async fn batch(
    pool: &PgPool,
    ids: &PostIdGenerator,
    thread: i64,
    parents: &[i64],
    offset: i64,
) -> Vec<i64> {
    let known: HashMap<i64, KnownParent> = PostRepo::find_locations(pool, parents)
        .await
        .unwrap()
        .into_iter()
        .map(|l| {
            (
                l.id,
                KnownParent {
                    thread: l.thread_id,
                    path: l.path,
                },
            )
        })
        .collect();
    let created = Utc::now() + Duration::seconds(offset);
    let posts: Vec<NewPost> = place_batch(thread, parents, &known, ids)
        .unwrap()
        .into_iter()
        .map(|p| NewPost {
            id: p.id,
            parent: p.parent,
            author: "alice".into(),
            message: "m".into(),
            forum: "f".into(),
            thread,
            path: p.path,
            created,
        })
        .collect();
    PostRepo::insert_batch(pool, &posts)
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.id)
        .collect()
}

fn request(thread: i64, sort: PostSort) -> TraversalRequest {
    TraversalRequest::new(thread, sort)
}

fn ids(posts: &[forum_db::models::post::Post]) -> Vec<i64> {
    posts.iter().map(|p| p.id).collect()
}

/// Roots 1, 4, 5 with replies {2, 3} under 1, {6, 7, 8} under 5, and 9
/// under 2.
async fn forest(pool: &PgPool) -> i64 {
    let thread = seed_thread(pool).await;
    let ids = PostIdGenerator::new();
    batch(pool, &ids, thread, &[0], 0).await;
    batch(pool, &ids, thread, &[1, 1], 1).await;
    batch(pool, &ids, thread, &[0], 2).await;
    batch(pool, &ids, thread, &[0], 3).await;
    batch(pool, &ids, thread, &[5, 5, 5], 4).await;
    batch(pool, &ids, thread, &[2], 5).await;
    thread
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_path_of(pool: PgPool) {
    forest(&pool).await;
    let store = PgPostStore::new(pool);

    assert_eq!(
        store.path_of(9).await.unwrap().as_deref(),
        Some("0000001.0000002.0000009.0000000.0000000")
    );
    assert!(store.path_of(99).await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_tree_is_preorder(pool: PgPool) {
    let thread = forest(&pool).await;
    let store = PgPostStore::new(pool);
    let traversal = ThreadTraversal::new(&store);

    let asc = traversal.posts(&request(thread, PostSort::Tree)).await.unwrap();
    assert_eq!(ids(&asc), vec![1, 2, 9, 3, 4, 5, 6, 7, 8]);

    let mut req = request(thread, PostSort::Tree);
    req.direction = Direction::Desc;
    req.since = Some(4);
    let desc = traversal.posts(&req).await.unwrap();
    assert_eq!(ids(&desc), vec![3, 9, 2, 1]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_parent_tree_pages_by_root(pool: PgPool) {
    let thread = forest(&pool).await;
    let store = PgPostStore::new(pool);
    let traversal = ThreadTraversal::new(&store);

    let mut req = request(thread, PostSort::ParentTree);
    req.limit = Some(2);
    let page = traversal.posts(&req).await.unwrap();
    assert_eq!(ids(&page), vec![1, 2, 9, 3, 4]);

    req.since = Some(9);
    let page = traversal.posts(&req).await.unwrap();
    assert_eq!(ids(&page), vec![4, 5, 6, 7, 8]);

    req.since = None;
    req.direction = Direction::Desc;
    let page = traversal.posts(&req).await.unwrap();
    assert_eq!(ids(&page), vec![5, 6, 7, 8, 4]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_flat_orders_by_created_then_id(pool: PgPool) {
    let thread = forest(&pool).await;
    let store = PgPostStore::new(pool);
    let traversal = ThreadTraversal::new(&store);

    let mut req = request(thread, PostSort::Flat);
    req.since = Some(3);
    req.limit = Some(4);
    let page = traversal.posts(&req).await.unwrap();
    assert_eq!(ids(&page), vec![4, 5, 6, 7]);

    req.direction = Direction::Desc;
    req.since = Some(7);
    req.limit = None;
    let page = traversal.posts(&req).await.unwrap();
    assert_eq!(ids(&page), vec![6, 5, 4, 3, 2, 1]);
}
