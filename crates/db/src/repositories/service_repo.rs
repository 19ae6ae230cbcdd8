//! Service-wide maintenance queries.

use sqlx::PgPool;

use crate::models::status::ServiceStatus;

pub struct ServiceRepo;

impl ServiceRepo {
    /// Row counts of every entity table.
    pub async fn status(pool: &PgPool) -> Result<ServiceStatus, sqlx::Error> {
        sqlx::query_as::<_, ServiceStatus>(
            "SELECT
                (SELECT COUNT(*) FROM users) AS \"user\",
                (SELECT COUNT(*) FROM forums) AS forum,
                (SELECT COUNT(*) FROM threads) AS thread,
                (SELECT COUNT(*) FROM posts) AS post",
        )
        .fetch_one(pool)
        .await
    }

    /// Purge every entity.
    pub async fn clear(pool: &PgPool) -> Result<(), sqlx::Error> {
        sqlx::query("TRUNCATE votes, posts, threads, forums, users RESTART IDENTITY CASCADE")
            .execute(pool)
            .await?;
        Ok(())
    }
}
