use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Account role, stored in Postgres as the `user_role` enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "UPPERCASE")]
#[sqlx(type_name = "user_role", rename_all = "UPPERCASE")]
pub enum Role {
    Student,
    Mentor,
}

/// Full user record as held by the store.
///
/// `password` is the bcrypt digest. The record deliberately has no serde
/// derives: anything leaving the API goes through a response type that
/// drops the digest.
#[derive(Clone, Debug, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub password: String,
    pub name: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for `UserStore::create_user`; id and timestamps are store-generated
#[derive(Clone, Debug)]
pub struct NewUser {
    pub email: String,
    pub password: String,
    pub name: String,
    pub role: Role,
}

#[derive(Serialize, Deserialize, Clone, Debug, sqlx::FromRow)]
pub struct MentorshipRequest {
    pub id: Uuid,
    pub description: String,
    pub duration: i32,
    #[serde(rename = "mentorId")]
    pub mentor_id: Uuid,
    #[serde(rename = "studentId")]
    pub student_id: Uuid,
    // None = pending, Some(true) = accepted, Some(false) = declined
    #[serde(rename = "isConfirmed")]
    pub is_confirmed: Option<bool>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// Input for `MentorshipStore::create_request`; id, timestamps and the
/// pending confirmation state are store-generated
#[derive(Clone, Debug)]
pub struct NewMentorshipRequest {
    pub description: String,
    pub duration: i32,
    pub mentor_id: Uuid,
    pub student_id: Uuid,
}

/// Minimal user projection joined into request listings (id + email only)
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct UserSummary {
    pub id: Uuid,
    pub email: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct MentorshipRequestWithUsers {
    #[serde(flatten)]
    pub request: MentorshipRequest,
    pub mentor: UserSummary,
    pub student: UserSummary,
}

// Response DTOs for general use across services
#[derive(Serialize, Debug)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Serialize, Debug)]
pub struct MessageResponse {
    pub message: String,
}
