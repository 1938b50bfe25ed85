use std::sync::Arc;

use axum::Router;
use chrono::Utc;
use uuid::Uuid;

use mentorize_shared::auth::hash_password;
use mentorize_shared::models::{MentorshipRequest, Role, User};
use mentorize_shared::test_utils::http_test_utils::test_jwt_keys;
use mentorize_shared::test_utils::memory_store::MemoryStore;

use crate::routes;

// Minimum bcrypt cost keeps test hashing fast
pub const TEST_BCRYPT_COST: u32 = 4;

pub const TEST_CORS_ORIGIN: &str = "http://localhost:3000";

/// Router wired to the given in-memory store, which backs both store traits
pub fn test_app(store: Arc<MemoryStore>) -> Router {
    routes::create_router_with_stores(
        Arc::clone(&store),
        store,
        test_jwt_keys(),
        TEST_BCRYPT_COST,
        TEST_CORS_ORIGIN,
    )
}

/// Builds a user whose stored digest matches the given plaintext password
pub fn test_user(email: &str, name: &str, role: Role, password: &str) -> User {
    let now = Utc::now();
    User {
        id: Uuid::new_v4(),
        email: email.to_string(),
        password: hash_password(password, TEST_BCRYPT_COST).expect("Failed to hash test password"),
        name: name.to_string(),
        role,
        created_at: now,
        updated_at: now,
    }
}

/// Builds a pending mentorship request between the given parties
pub fn test_mentorship_request(mentor_id: Uuid, student_id: Uuid) -> MentorshipRequest {
    let now = Utc::now();
    MentorshipRequest {
        id: Uuid::new_v4(),
        description: "Code review session".to_string(),
        duration: 30,
        mentor_id,
        student_id,
        is_confirmed: None,
        created_at: now,
        updated_at: now,
    }
}

/// Request carrying an explicit bearer token, e.g. one returned by login
pub fn bearer_request(
    method: &str,
    path: &str,
    token: &str,
    body: Option<serde_json::Value>,
) -> http::Request<axum::body::Body> {
    let mut builder = http::Request::builder()
        .method(method)
        .uri(path)
        .header("authorization", format!("Bearer {}", token));

    if body.is_some() {
        builder = builder.header("content-type", "application/json");
    }

    match body {
        Some(json_body) => builder
            .body(axum::body::Body::from(json_body.to_string()))
            .unwrap(),
        None => builder.body(axum::body::Body::empty()).unwrap(),
    }
}
