//! User-store database queries.
//!
//! Users are created once by registration and only read afterwards; there
//! are no update or delete queries. Email uniqueness is enforced by the
//! database constraint, not by application-level checks.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use super::AuthError;
use crate::models::auth::{User, UserWithPassword};

/// Create a new user, returning the stored record without its hash.
///
/// A unique-constraint violation on `email` maps to
/// [`AuthError::DuplicateEmail`]; every other database error propagates
/// unchanged.
pub async fn create_user(
    pool: &PgPool,
    email: &str,
    password_hash: &str,
) -> Result<User, AuthError> {
    let row = sqlx::query_as::<_, (String, String, DateTime<Utc>)>(
        "INSERT INTO users (email, password_hash) VALUES ($1, $2) \
         RETURNING id::text, email, created_at",
    )
    .bind(email)
    .bind(password_hash)
    .fetch_one(pool)
    .await;

    match row {
        Ok((id, email, created_at)) => Ok(User {
            id,
            email,
            created_at,
        }),
        Err(sqlx::Error::Database(db)) if db.is_unique_violation() => {
            Err(AuthError::DuplicateEmail)
        }
        Err(e) => Err(e.into()),
    }
}

/// Fetch a user by email, including the stored password hash.
pub async fn find_user_by_email(
    pool: &PgPool,
    email: &str,
) -> Result<Option<UserWithPassword>, AuthError> {
    let row = sqlx::query_as::<_, (String, String, String, DateTime<Utc>)>(
        "SELECT id::text, email, password_hash, created_at FROM users WHERE email = $1",
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|(id, email, password_hash, created_at)| UserWithPassword {
        user: User {
            id,
            email,
            created_at,
        },
        password_hash,
    }))
}
