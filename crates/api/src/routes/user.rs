//! Route definitions for the `/user` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::user;
use crate::state::AppState;

/// Routes mounted at `/user`.
///
/// ```text
/// POST   /{nickname}/create     -> create
/// GET    /{nickname}/profile    -> profile
/// POST   /{nickname}/profile    -> update
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{nickname}/create", post(user::create))
        .route(
            "/{nickname}/profile",
            get(user::profile).post(user::update),
        )
}
