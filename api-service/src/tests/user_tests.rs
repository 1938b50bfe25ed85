use std::sync::Arc;

use axum::http::StatusCode;
use tower::ServiceExt;

use mentorize_shared::models::Role;
use mentorize_shared::test_utils::http_test_utils::{create_anonymous_request, response_to_json};
use mentorize_shared::test_utils::memory_store::MemoryStore;
use mentorize_shared::test_utils::test_logging::init_test_logging;

use crate::tests::utils::{test_app, test_user};

#[tokio::test]
async fn test_list_users_is_public() {
    init_test_logging();
    let app = test_app(Arc::new(MemoryStore::new()));

    let response = app
        .oneshot(create_anonymous_request("GET", "/users", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response_to_json(response).await;
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_list_users_strips_password_digests() {
    init_test_logging();
    let users = vec![
        test_user("student@example.com", "Ana", Role::Student, "pw1"),
        test_user("mentor@example.com", "Bruno", Role::Mentor, "pw2"),
    ];
    let app = test_app(Arc::new(MemoryStore::with_data(users, vec![])));

    let response = app
        .oneshot(create_anonymous_request("GET", "/users", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response_to_json(response).await;
    let listed = body.as_array().unwrap();
    assert_eq!(listed.len(), 2);

    for user in listed {
        assert!(user["id"].as_str().is_some());
        assert!(user["email"].as_str().is_some());
        assert!(user["name"].as_str().is_some());
        assert!(user["role"].as_str().is_some());
        assert!(user.get("password").is_none());
    }
}
