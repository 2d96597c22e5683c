//! API request/response models.
//!
//! Wire shapes are camelCase JSON. `UserResponse` is the sanitized record:
//! it is built from the domain `User` only, so no hash field can appear in
//! any response.

use serde::{Deserialize, Serialize};

use authd_core::models::auth::User;

/// `POST /auth/register` request body.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
}

/// `POST /auth/login` request body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Sanitized user returned by register and login.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            created_at: user.created_at,
        }
    }
}

/// Error body returned for all failed requests.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

/// `GET /api/health` response.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub greeting: String,
    pub db_connected: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn user_response_carries_no_hash_field() {
        let resp = UserResponse::from(User {
            id: "11111111-2222-3333-4444-555555555555".into(),
            email: "a@x.com".into(),
            created_at: Utc::now(),
        });
        let json = serde_json::to_value(&resp).expect("serialize");
        let obj = json.as_object().expect("object");
        assert!(obj.contains_key("email"));
        assert!(!obj.contains_key("passwordHash"));
        assert!(!obj.contains_key("password_hash"));
        assert!(!obj.contains_key("hash"));
    }
}
