//! Handlers for posts: batch creation, thread listings and single posts.

use std::collections::HashMap;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use forum_core::error::CoreError;
use forum_core::pagination::page_limit;
use forum_core::post_batch::{place_batch, KnownParent};
use forum_core::post_query::{Direction, PostSort};
use forum_core::types::{PostId, ROOT_PARENT};
use forum_db::models::post::{CreatePost, NewPost, Post, PostDetails, UpdatePost};
use forum_db::repositories::{ForumRepo, PostRepo, ThreadRepo, UserRepo};
use forum_db::store::PgPostStore;
use forum_db::traversal::{ThreadTraversal, TraversalRequest};

use crate::error::{AppError, AppResult};
use crate::handlers::thread::resolve;
use crate::query::{RelatedParams, ThreadPostsParams};
use crate::state::AppState;

/// POST /api/thread/{slug_or_id}/create
///
/// Creates every post of the body in one transaction, all sharing one
/// `created` timestamp. A parent outside the thread answers 409, an unknown
/// author 404; either way nothing is stored.
pub async fn create_batch(
    State(state): State<AppState>,
    Path(slug_or_id): Path<String>,
    Json(inputs): Json<Vec<CreatePost>>,
) -> AppResult<(StatusCode, Json<Vec<Post>>)> {
    let thread = resolve(&state, &slug_or_id).await?;
    if inputs.is_empty() {
        return Ok((StatusCode::CREATED, Json(Vec::new())));
    }

    let parents: Vec<PostId> = inputs.iter().map(|input| input.parent).collect();
    let replied_to: Vec<PostId> = parents
        .iter()
        .copied()
        .filter(|&parent| parent != ROOT_PARENT)
        .collect();
    let known: HashMap<PostId, KnownParent> = PostRepo::find_locations(&state.pool, &replied_to)
        .await?
        .into_iter()
        .map(|location| {
            (
                location.id,
                KnownParent {
                    thread: location.thread_id,
                    path: location.path,
                },
            )
        })
        .collect();

    let placements = place_batch(thread.id, &parents, &known, &state.post_ids)?;

    let created = Utc::now();
    let posts: Vec<NewPost> = placements
        .into_iter()
        .zip(inputs)
        .map(|(placement, input)| NewPost {
            id: placement.id,
            parent: placement.parent,
            author: input.author,
            message: input.message,
            forum: thread.forum.clone(),
            thread: thread.id,
            path: placement.path,
            created,
        })
        .collect();

    let posts = PostRepo::insert_batch(&state.pool, &posts).await?;
    tracing::debug!(thread_id = thread.id, count = posts.len(), "Post batch created");
    Ok((StatusCode::CREATED, Json(posts)))
}

/// GET /api/thread/{slug_or_id}/posts?sort=&limit=&since=&desc=
///
/// `sort` defaults to `flat`; an unknown value answers 400.
pub async fn list_by_thread(
    State(state): State<AppState>,
    Path(slug_or_id): Path<String>,
    Query(params): Query<ThreadPostsParams>,
) -> AppResult<Json<Vec<Post>>> {
    let sort = match params.sort.as_deref() {
        Some(raw) => raw.parse::<PostSort>()?,
        None => PostSort::default(),
    };
    let thread = resolve(&state, &slug_or_id).await?;

    let request = TraversalRequest {
        thread: thread.id,
        sort,
        limit: page_limit(params.limit),
        since: params.since,
        direction: Direction::from_desc(params.desc),
    };
    let store = PgPostStore::new(state.pool.clone());
    let posts = ThreadTraversal::new(&store).posts(&request).await?;
    Ok(Json(posts))
}

/// GET /api/post/{id}/details?related=user,forum,thread
pub async fn details(
    State(state): State<AppState>,
    Path(id): Path<PostId>,
    Query(params): Query<RelatedParams>,
) -> AppResult<Json<PostDetails>> {
    let post = find_post(&state, id).await?;

    let author = if params.includes("user") {
        UserRepo::find_by_nickname(&state.pool, &post.author).await?
    } else {
        None
    };
    let forum = if params.includes("forum") {
        ForumRepo::find_by_slug(&state.pool, &post.forum).await?
    } else {
        None
    };
    let thread = if params.includes("thread") {
        ThreadRepo::find_by_id(&state.pool, post.thread).await?
    } else {
        None
    };

    Ok(Json(PostDetails {
        post,
        author,
        forum,
        thread,
    }))
}

/// POST /api/post/{id}/details
///
/// A missing or empty message leaves the post untouched.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<PostId>,
    Json(input): Json<UpdatePost>,
) -> AppResult<Json<Post>> {
    let post = match input.message.as_deref() {
        Some(message) if !message.is_empty() => PostRepo::update_message(&state.pool, id, message)
            .await?
            .ok_or_else(|| AppError::Core(CoreError::not_found("Post", id)))?,
        _ => find_post(&state, id).await?,
    };
    Ok(Json(post))
}

async fn find_post(state: &AppState, id: PostId) -> AppResult<Post> {
    PostRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Post", id)))
}
