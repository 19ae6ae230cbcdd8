use std::sync::Arc;

use forum_core::id_gen::PostIdGenerator;
use forum_db::repositories::PostRepo;

use crate::config::ServerConfig;
use crate::error::AppError;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: forum_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Source of post ids, shared by every request creating posts.
    pub post_ids: Arc<PostIdGenerator>,
}

impl AppState {
    /// Build state with the post id generator continuing after the highest
    /// id already stored.
    pub async fn init(pool: forum_db::DbPool, config: ServerConfig) -> Result<Self, AppError> {
        let last = PostRepo::max_id(&pool).await?;
        let last = u32::try_from(last)
            .map_err(|_| AppError::InternalError(format!("post id {last} out of range")))?;
        tracing::debug!(last_post_id = last, "Seeded post id generator");

        Ok(Self {
            pool,
            config: Arc::new(config),
            post_ids: Arc::new(PostIdGenerator::starting_after(last)),
        })
    }
}
