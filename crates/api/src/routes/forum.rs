//! Route definitions for the `/forum` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{forum, thread};
use crate::state::AppState;

/// Routes mounted at `/forum`.
///
/// ```text
/// POST   /create                -> forum::create
/// GET    /{slug}/details        -> forum::details
/// POST   /{slug}/create         -> thread::create
/// GET    /{slug}/threads        -> thread::list_by_forum
/// GET    /{slug}/users          -> forum::list_users
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/create", post(forum::create))
        .route("/{slug}/details", get(forum::details))
        .route("/{slug}/create", post(thread::create))
        .route("/{slug}/threads", get(thread::list_by_forum))
        .route("/{slug}/users", get(forum::list_users))
}
