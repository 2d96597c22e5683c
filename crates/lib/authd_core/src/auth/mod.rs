//! Authentication domain logic.
//!
//! Provides password hashing and the user-store database queries shared by
//! the HTTP layer in `authd_api`.

pub mod password;
pub mod queries;

use thiserror::Error;

/// Authentication errors.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Registration attempted with an email that already has an account.
    #[error("Email already exists")]
    DuplicateEmail,

    /// Login failed: unknown email or wrong password. The two causes are
    /// deliberately indistinguishable (enumeration resistance).
    #[error("Credentials incorrect")]
    InvalidCredentials,

    /// A stored password hash is not a valid PHC-encoded Argon2 hash.
    /// Indicates data corruption, not a bad credential.
    #[error("Malformed password hash: {0}")]
    MalformedHash(String),

    #[error("Database error: {0}")]
    Db(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}
