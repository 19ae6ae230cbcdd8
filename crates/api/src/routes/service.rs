//! Route definitions for the `/service` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::service;
use crate::state::AppState;

/// Routes mounted at `/service`.
///
/// ```text
/// GET    /status                -> status
/// POST   /clear                 -> clear
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/status", get(service::status))
        .route("/clear", post(service::clear))
}
