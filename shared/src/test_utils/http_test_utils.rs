use axum::body::to_bytes;
use chrono::Utc;
use jsonwebtoken::{encode, EncodingKey, Header};
use serde_json::Value;
use uuid::Uuid;

use crate::auth::{Claims, JwtKeys};

/// Secret shared by test routers and test token builders
pub const TEST_JWT_SECRET: &str = "test_secret_key_for_jwt_encoding_in_tests";

/// Keys matching the tokens produced by `create_jwt_token`
pub fn test_jwt_keys() -> JwtKeys {
    JwtKeys::new(TEST_JWT_SECRET, 3600)
}

/// Helper function to extract JSON from an Axum response
///
/// This is useful in tests to easily parse and assert on JSON responses.
pub async fn response_to_json(response: axum::response::Response) -> Value {
    let body = response.into_body();
    let bytes = to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Creates a JWT token for testing purposes, valid for an hour
pub fn create_jwt_token(user_id: Uuid, email: &str) -> String {
    create_jwt_token_with_exp(user_id, email, 3600)
}

/// Creates a token whose expiry is offset from now by the given seconds.
/// Offsets below -60 produce a token past the default validation leeway.
pub fn create_jwt_token_with_exp(user_id: Uuid, email: &str, exp_offset_secs: i64) -> String {
    let now = Utc::now().timestamp();

    let claims = Claims {
        sub: user_id.to_string(),
        email: email.to_string(),
        iat: now as usize,
        exp: (now + exp_offset_secs).max(0) as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_JWT_SECRET.as_bytes()),
    )
    .expect("Failed to create JWT")
}

/// Helper function to create an authorization header with a bearer token
pub fn create_auth_header(user_id: Uuid, email: &str) -> (String, String) {
    let token = create_jwt_token(user_id, email);
    ("authorization".to_string(), format!("Bearer {}", token))
}

/// Helper function to create a test request with authentication headers
pub fn create_test_request(
    method: &str,
    path: &str,
    user_id: Uuid,
    body: Option<serde_json::Value>,
) -> http::Request<axum::body::Body> {
    let mut builder = http::Request::builder().method(method).uri(path);

    // Add authorization header with JWT
    let (auth_key, auth_value) = create_auth_header(user_id, "test@example.com");
    builder = builder.header(auth_key, auth_value);

    // Add content type if there is a body
    if body.is_some() {
        builder = builder.header("content-type", "application/json");
    }

    // Build the request with the appropriate body
    match body {
        Some(json_body) => builder
            .body(axum::body::Body::from(json_body.to_string()))
            .unwrap(),
        None => builder.body(axum::body::Body::empty()).unwrap(),
    }
}

/// Helper function to create a test request without any credentials
pub fn create_anonymous_request(
    method: &str,
    path: &str,
    body: Option<serde_json::Value>,
) -> http::Request<axum::body::Body> {
    let mut builder = http::Request::builder().method(method).uri(path);

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
