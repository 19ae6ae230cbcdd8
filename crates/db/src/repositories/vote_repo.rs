//! Repository for the `votes` table and the thread tally it drives.

use forum_core::types::DbId;
use forum_core::vote::tally_delta;
use sqlx::PgPool;

use crate::models::thread::Thread;
use crate::repositories::thread_repo::COLUMNS as THREAD_COLUMNS;

pub struct VoteRepo;

impl VoteRepo {
    /// Record `nickname`'s voice on a thread and move the tally by the
    /// difference to any earlier voice.
    ///
    /// The thread row is locked for the duration, so concurrent votes on one
    /// thread apply one after another. Returns `None` if the thread does not
    /// exist; an unknown nickname fails with a foreign key violation.
    pub async fn cast(
        pool: &PgPool,
        thread_id: DbId,
        nickname: &str,
        voice: i16,
    ) -> Result<Option<Thread>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let locked: Option<DbId> =
            sqlx::query_scalar("SELECT id FROM threads WHERE id = $1 FOR UPDATE")
                .bind(thread_id)
                .fetch_optional(&mut *tx)
                .await?;
        if locked.is_none() {
            return Ok(None);
        }

        let previous: Option<i16> = sqlx::query_scalar(
            "SELECT voice FROM votes WHERE thread_id = $1 AND author = $2::citext",
        )
        .bind(thread_id)
        .bind(nickname)
        .fetch_optional(&mut *tx)
        .await?;

        sqlx::query(
            "INSERT INTO votes (thread_id, author, voice)
             VALUES ($1, $2, $3)
             ON CONFLICT ON CONSTRAINT uq_votes_thread_author
             DO UPDATE SET voice = EXCLUDED.voice",
        )
        .bind(thread_id)
        .bind(nickname)
        .bind(voice)
        .execute(&mut *tx)
        .await?;

        let query = format!(
            "UPDATE threads SET votes = votes + $2 WHERE id = $1 RETURNING {THREAD_COLUMNS}"
        );
        let thread = sqlx::query_as::<_, Thread>(&query)
            .bind(thread_id)
            .bind(tally_delta(previous, voice))
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(thread))
    }
}
