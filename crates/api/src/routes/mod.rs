pub mod forum;
pub mod health;
pub mod post;
pub mod service;
pub mod thread;
pub mod user;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /user/{nickname}/...          users
/// /forum/...                    forums and their threads
/// /thread/{slug_or_id}/...      threads, votes, posts of a thread
/// /post/{id}/...                single posts
/// /service/...                  status and purge
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/user", user::router())
        .nest("/forum", forum::router())
        .nest("/thread", thread::router())
        .nest("/post", post::router())
        .nest("/service", service::router())
}
