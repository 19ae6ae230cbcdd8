//! Handlers for the `/service` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use forum_db::models::status::ServiceStatus;
use forum_db::repositories::ServiceRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/service/status
pub async fn status(State(state): State<AppState>) -> AppResult<Json<ServiceStatus>> {
    Ok(Json(ServiceRepo::status(&state.pool).await?))
}

/// POST /api/service/clear
///
/// Purges every entity. The post id generator keeps counting.
pub async fn clear(State(state): State<AppState>) -> AppResult<StatusCode> {
    ServiceRepo::clear(&state.pool).await?;
    tracing::debug!("Service data cleared");
    Ok(StatusCode::OK)
}
