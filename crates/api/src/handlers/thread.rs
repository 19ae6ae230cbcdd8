//! Handlers for threads: creation under a forum, details, edits and votes.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use forum_core::error::CoreError;
use forum_core::pagination::page_limit;
use forum_core::post_query::Direction;
use forum_core::thread_ref::ThreadRef;
use forum_core::vote::validate_voice;
use forum_db::models::thread::{CreateThread, Thread, UpdateThread};
use forum_db::models::vote::CreateVote;
use forum_db::repositories::{ForumRepo, ThreadRepo, UserRepo, VoteRepo};

use crate::error::{is_unique_violation, AppError, AppResult};
use crate::query::ThreadListParams;
use crate::state::AppState;

/// Resolve a `{slug_or_id}` path segment to its thread, or 404.
pub(crate) async fn resolve(state: &AppState, slug_or_id: &str) -> AppResult<Thread> {
    let thread_ref = ThreadRef::parse(slug_or_id);
    ThreadRepo::find(&state.pool, &thread_ref)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Thread", thread_ref)))
}

/// POST /api/forum/{slug}/create
///
/// Forum and author must exist. A taken thread slug answers 409 with the
/// existing thread.
pub async fn create(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Json(mut input): Json<CreateThread>,
) -> AppResult<Response> {
    let forum = ForumRepo::find_by_slug(&state.pool, &slug)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Forum", &slug)))?;
    let author = UserRepo::find_by_nickname(&state.pool, &input.author)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("User", &input.author)))?;
    input.author = author.nickname;

    match ThreadRepo::create(&state.pool, &forum.slug, &input).await {
        Ok(thread) => Ok((StatusCode::CREATED, Json(thread)).into_response()),
        Err(err) if is_unique_violation(&err) => {
            let slug = input.slug.as_deref().unwrap_or_default();
            let existing = ThreadRepo::find_by_slug(&state.pool, slug)
                .await?
                .ok_or(AppError::Database(err))?;
            Ok((StatusCode::CONFLICT, Json(existing)).into_response())
        }
        Err(err) => Err(err.into()),
    }
}

/// GET /api/forum/{slug}/threads?limit=&since=&desc=
pub async fn list_by_forum(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(params): Query<ThreadListParams>,
) -> AppResult<Json<Vec<Thread>>> {
    let forum = ForumRepo::find_by_slug(&state.pool, &slug)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Forum", &slug)))?;

    let threads = ThreadRepo::list_by_forum(
        &state.pool,
        &forum.slug,
        params.since,
        page_limit(params.limit),
        Direction::from_desc(params.desc),
    )
    .await?;
    Ok(Json(threads))
}

/// GET /api/thread/{slug_or_id}/details
pub async fn details(
    State(state): State<AppState>,
    Path(slug_or_id): Path<String>,
) -> AppResult<Json<Thread>> {
    Ok(Json(resolve(&state, &slug_or_id).await?))
}

/// POST /api/thread/{slug_or_id}/details
pub async fn update(
    State(state): State<AppState>,
    Path(slug_or_id): Path<String>,
    Json(input): Json<UpdateThread>,
) -> AppResult<Json<Thread>> {
    let thread = resolve(&state, &slug_or_id).await?;
    let thread = ThreadRepo::update(&state.pool, thread.id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Thread", thread.id)))?;
    Ok(Json(thread))
}

/// POST /api/thread/{slug_or_id}/vote
///
/// Unknown voter answers 404 through the votes foreign key.
pub async fn vote(
    State(state): State<AppState>,
    Path(slug_or_id): Path<String>,
    Json(input): Json<CreateVote>,
) -> AppResult<Json<Thread>> {
    let voice = validate_voice(input.voice)?;
    let thread = resolve(&state, &slug_or_id).await?;

    let thread = VoteRepo::cast(&state.pool, thread.id, &input.nickname, voice)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Thread", thread.id)))?;
    tracing::debug!(thread_id = thread.id, voice, votes = thread.votes, "Thread voted");
    Ok(Json(thread))
}
