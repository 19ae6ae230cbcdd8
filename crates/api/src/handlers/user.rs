//! Handlers for the `/user` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use forum_core::error::CoreError;
use forum_db::models::user::{CreateUser, UpdateUser, User};
use forum_db::repositories::UserRepo;

use crate::error::{is_unique_violation, AppError, AppResult};
use crate::state::AppState;

/// POST /api/user/{nickname}/create
///
/// 201 with the new user, or 409 with every user already holding the
/// nickname or the email.
pub async fn create(
    State(state): State<AppState>,
    Path(nickname): Path<String>,
    Json(input): Json<CreateUser>,
) -> AppResult<Response> {
    match UserRepo::create(&state.pool, &nickname, &input).await {
        Ok(user) => Ok((StatusCode::CREATED, Json(user)).into_response()),
        Err(err) if is_unique_violation(&err) => {
            let existing =
                UserRepo::find_conflicting(&state.pool, &nickname, &input.email).await?;
            Ok((StatusCode::CONFLICT, Json(existing)).into_response())
        }
        Err(err) => Err(err.into()),
    }
}

/// GET /api/user/{nickname}/profile
pub async fn profile(
    State(state): State<AppState>,
    Path(nickname): Path<String>,
) -> AppResult<Json<User>> {
    let user = UserRepo::find_by_nickname(&state.pool, &nickname)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("User", &nickname)))?;
    Ok(Json(user))
}

/// POST /api/user/{nickname}/profile
///
/// Missing or empty fields keep their value. An email already held by
/// another user answers 409 naming that user.
pub async fn update(
    State(state): State<AppState>,
    Path(nickname): Path<String>,
    Json(input): Json<UpdateUser>,
) -> AppResult<Json<User>> {
    match UserRepo::update(&state.pool, &nickname, &input).await {
        Ok(Some(user)) => Ok(Json(user)),
        Ok(None) => Err(AppError::Core(CoreError::not_found("User", &nickname))),
        Err(err) if is_unique_violation(&err) => {
            let email = input.email.as_deref().unwrap_or_default();
            let owner = UserRepo::find_by_email(&state.pool, email)
                .await?
                .ok_or(AppError::Database(err))?;
            Err(AppError::Core(CoreError::Conflict(format!(
                "This email is already registered by user: {}",
                owner.nickname
            ))))
        }
        Err(err) => Err(err.into()),
    }
}
