//! Authentication domain models.
//!
//! `User` is the sanitized record that may cross the operation boundary.
//! `UserWithPassword` exists only for internal auth flows and deliberately
//! does not derive `Serialize`, so the hash cannot leave through JSON.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Domain user. Contains no secret fields by construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// User with password hash, for internal auth flows only.
#[derive(Debug, Clone)]
pub struct UserWithPassword {
    pub user: User,
    pub password_hash: String,
}
