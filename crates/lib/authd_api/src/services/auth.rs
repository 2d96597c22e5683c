//! Authentication service — register/login flows delegating to `authd_core::auth`.

use sqlx::PgPool;
use tracing::{debug, info};

use authd_core::auth::AuthError;
use authd_core::auth::password::{hash_password, verify_password};
use authd_core::auth::queries;

use crate::error::AppResult;
use crate::models::UserResponse;

/// Register a new user account.
///
/// Hashes the password, stores the record, and returns the sanitized user.
/// A duplicate email fails with 403 "Email already exists"; any other store
/// failure propagates unchanged.
pub async fn register(pool: &PgPool, email: &str, password: &str) -> AppResult<UserResponse> {
    let pw_hash = hash_password(password)?;

    // The database unique constraint is the arbiter of duplicates; no
    // pre-check, so concurrent registrations race safely.
    let user = queries::create_user(pool, email, &pw_hash).await?;

    info!(email, "user registered");
    Ok(UserResponse::from(user))
}

/// Authenticate with email + password, returning the sanitized user.
///
/// Unknown email and wrong password produce the identical error kind and
/// message so callers cannot probe which emails have accounts.
pub async fn login(pool: &PgPool, email: &str, password: &str) -> AppResult<UserResponse> {
    let record = queries::find_user_by_email(pool, email)
        .await?
        .ok_or(AuthError::InvalidCredentials)?;

    // A malformed stored hash errors out here as an internal failure, not
    // as a credentials failure.
    if !verify_password(password, &record.password_hash)? {
        return Err(AuthError::InvalidCredentials.into());
    }

    debug!(email, "login succeeded");
    Ok(UserResponse::from(record.user))
}
