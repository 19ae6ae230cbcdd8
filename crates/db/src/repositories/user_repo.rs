//! Repository for the `users` table.

use sqlx::PgPool;

use crate::models::user::{CreateUser, UpdateUser, User};

/// Column list shared across queries. CITEXT columns are read back as TEXT.
pub(crate) const COLUMNS: &str = "id, nickname::TEXT AS nickname, fullname, about, email::TEXT AS email";

pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the created row.
    ///
    /// Fails with a `uq_users_nickname` / `uq_users_email` unique violation
    /// when either is taken; see [`UserRepo::find_conflicting`].
    pub async fn create(
        pool: &PgPool,
        nickname: &str,
        input: &CreateUser,
    ) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (nickname, fullname, about, email)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(nickname)
            .bind(&input.fullname)
            .bind(&input.about)
            .bind(&input.email)
            .fetch_one(pool)
            .await
    }

    /// Find a user by nickname, ignoring case.
    pub async fn find_by_nickname(
        pool: &PgPool,
        nickname: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE nickname = $1::citext");
        sqlx::query_as::<_, User>(&query)
            .bind(nickname)
            .fetch_optional(pool)
            .await
    }

    /// Users holding either the nickname or the email.
    pub async fn find_conflicting(
        pool: &PgPool,
        nickname: &str,
        email: &str,
    ) -> Result<Vec<User>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM users
             WHERE nickname = $1::citext OR email = $2::citext
             ORDER BY id"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(nickname)
            .bind(email)
            .fetch_all(pool)
            .await
    }

    /// Find the user holding `email`, ignoring case.
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE email = $1::citext");
        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Update profile fields. Missing or empty fields keep their value.
    ///
    /// Returns `None` if no user has the nickname. An email already held by
    /// another user fails with a `uq_users_email` unique violation.
    pub async fn update(
        pool: &PgPool,
        nickname: &str,
        input: &UpdateUser,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "UPDATE users SET
                fullname = COALESCE(NULLIF($2, ''), fullname),
                about = COALESCE(NULLIF($3, ''), about),
                email = COALESCE(NULLIF($4, '')::citext, email)
             WHERE nickname = $1::citext
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(nickname)
            .bind(&input.fullname)
            .bind(&input.about)
            .bind(&input.email)
            .fetch_optional(pool)
            .await
    }
}
