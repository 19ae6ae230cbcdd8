//! Handlers for the `/forum` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use forum_core::error::CoreError;
use forum_core::pagination::page_limit;
use forum_core::post_query::Direction;
use forum_db::models::forum::{CreateForum, Forum};
use forum_db::models::user::User;
use forum_db::repositories::{ForumRepo, UserRepo};

use crate::error::{is_unique_violation, AppError, AppResult};
use crate::query::ForumUsersParams;
use crate::state::AppState;

/// POST /api/forum/create
///
/// The owner must exist and is stored with its canonical nickname. A taken
/// slug answers 409 with the existing forum.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateForum>,
) -> AppResult<Response> {
    let owner = UserRepo::find_by_nickname(&state.pool, &input.user)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("User", &input.user)))?;

    match ForumRepo::create(&state.pool, &input, &owner.nickname).await {
        Ok(forum) => Ok((StatusCode::CREATED, Json(forum)).into_response()),
        Err(err) if is_unique_violation(&err) => {
            let existing = ForumRepo::find_by_slug(&state.pool, &input.slug)
                .await?
                .ok_or(AppError::Database(err))?;
            Ok((StatusCode::CONFLICT, Json(existing)).into_response())
        }
        Err(err) => Err(err.into()),
    }
}

/// GET /api/forum/{slug}/details
pub async fn details(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<Forum>> {
    let forum = ForumRepo::find_by_slug(&state.pool, &slug)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Forum", &slug)))?;
    Ok(Json(forum))
}

/// GET /api/forum/{slug}/users?limit=&since=&desc=
///
/// Everyone who started a thread or posted in the forum, by nickname.
pub async fn list_users(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(params): Query<ForumUsersParams>,
) -> AppResult<Json<Vec<User>>> {
    let forum = ForumRepo::find_by_slug(&state.pool, &slug)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Forum", &slug)))?;

    let users = ForumRepo::list_users(
        &state.pool,
        &forum.slug,
        params.since.as_deref(),
        page_limit(params.limit),
        Direction::from_desc(params.desc),
    )
    .await?;
    Ok(Json(users))
}
