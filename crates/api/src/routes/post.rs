//! Route definitions for the `/post` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::post;
use crate::state::AppState;

/// Routes mounted at `/post`.
///
/// ```text
/// GET    /{id}/details          -> details
/// POST   /{id}/details          -> update
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{id}/details", get(post::details).post(post::update))
}
