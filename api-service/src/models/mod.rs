use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use mentorize_shared::models::{Role, User};

// Request DTOs
#[derive(Deserialize, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize, Debug)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub name: String,
    pub role: Role,
}

/// Fields arrive optional so the boundary can reject incomplete payloads
/// with a 400 instead of a deserialization failure
#[derive(Deserialize, Debug)]
pub struct CreateMentorshipRequest {
    pub description: Option<String>,
    pub duration: Option<i32>,
    #[serde(rename = "mentorId")]
    pub mentor_id: Option<Uuid>,
}

#[derive(Deserialize, Debug)]
pub struct ConfirmMentorshipRequest {
    #[serde(rename = "isConfirmed")]
    pub is_confirmed: Option<bool>,
}

// Response DTOs
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub role: Role,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        // The bcrypt digest stays behind; only profile fields go out
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            role: user.role,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

#[derive(Serialize, Debug)]
pub struct TokenResponse {
    pub access_token: String,
}

#[derive(Serialize, Debug)]
pub struct RemovedCountResponse {
    #[serde(rename = "removedCount")]
    pub removed_count: u64,
}
