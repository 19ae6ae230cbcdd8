//! Route definitions for the `/thread` resource.
//!
//! `{slug_or_id}` is read as an id when it is a positive integer.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Routes mounted at `/thread`.
///
/// ```text
/// POST   /{slug_or_id}/create   -> post::create_batch
/// GET    /{slug_or_id}/details  -> thread::details
/// POST   /{slug_or_id}/details  -> thread::update
/// POST   /{slug_or_id}/vote     -> thread::vote
/// GET    /{slug_or_id}/posts    -> post::list_by_thread
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{slug_or_id}/create", post(handlers::post::create_batch))
        .route(
            "/{slug_or_id}/details",
            get(handlers::thread::details).post(handlers::thread::update),
        )
        .route("/{slug_or_id}/vote", post(handlers::thread::vote))
        .route("/{slug_or_id}/posts", get(handlers::post::list_by_thread))
}
