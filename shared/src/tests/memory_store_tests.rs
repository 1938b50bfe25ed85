use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::error::ServiceError;
use crate::models::{MentorshipRequest, NewMentorshipRequest, NewUser, Role, User};
use crate::store::{MentorshipStore, UserStore};
use crate::test_utils::memory_store::MemoryStore;
use crate::test_utils::test_logging::init_test_logging;

fn new_user(email: &str, role: Role) -> NewUser {
    NewUser {
        email: email.to_string(),
        password: "$2b$04$fakedigestfakedigestfakedigestfakedigest".to_string(),
        name: "Test User".to_string(),
        role,
    }
}

fn seeded_request(mentor_id: Uuid, student_id: Uuid) -> MentorshipRequest {
    let now = Utc::now();
    MentorshipRequest {
        id: Uuid::new_v4(),
        description: "Seeded request".to_string(),
        duration: 30,
        mentor_id,
        student_id,
        is_confirmed: None,
        created_at: now,
        updated_at: now,
    }
}

fn seeded_user(email: &str, role: Role) -> User {
    let now = Utc::now();
    User {
        id: Uuid::new_v4(),
        email: email.to_string(),
        password: "$2b$04$fakedigestfakedigestfakedigestfakedigest".to_string(),
        name: "Seeded User".to_string(),
        role,
        created_at: now,
        updated_at: now,
    }
}

#[tokio::test]
async fn test_create_and_find_user() {
    init_test_logging();
    let store = Arc::new(MemoryStore::new());

    let created = store
        .create_user(new_user("student@example.com", Role::Student))
        .await
        .unwrap();
    assert_eq!(created.email, "student@example.com");
    assert_eq!(created.role, Role::Student);

    let found = store
        .find_user_by_email("student@example.com")
        .await
        .unwrap();
    assert!(found.is_some());
    assert_eq!(found.unwrap().id, created.id);

    // Absence is a normal outcome
    let missing = store
        .find_user_by_email("unknown@example.com")
        .await
        .unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_create_user_duplicate_email_is_conflict() {
    init_test_logging();
    let store = MemoryStore::new();

    store
        .create_user(new_user("taken@example.com", Role::Student))
        .await
        .unwrap();

    let err = store
        .create_user(new_user("taken@example.com", Role::Mentor))
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::Conflict(_)));
}

#[tokio::test]
async fn test_list_users() {
    init_test_logging();
    let store = MemoryStore::new();

    store
        .create_user(new_user("a@example.com", Role::Student))
        .await
        .unwrap();
    store
        .create_user(new_user("b@example.com", Role::Mentor))
        .await
        .unwrap();

    let users = store.list_users().await.unwrap();
    assert_eq!(users.len(), 2);
}

#[tokio::test]
async fn test_create_request_starts_pending() {
    init_test_logging();
    let store = MemoryStore::new();

    let request = store
        .create_request(NewMentorshipRequest {
            description: "Need help with ownership".to_string(),
            duration: 45,
            mentor_id: Uuid::new_v4(),
            student_id: Uuid::new_v4(),
        })
        .await
        .unwrap();

    assert_eq!(request.is_confirmed, None);
    assert_eq!(request.duration, 45);
}

#[tokio::test]
async fn test_list_requests_joins_user_projections() {
    init_test_logging();
    let mentor = seeded_user("mentor@example.com", Role::Mentor);
    let student = seeded_user("student@example.com", Role::Student);
    let request = seeded_request(mentor.id, student.id);

    let store = MemoryStore::with_data(vec![mentor.clone(), student.clone()], vec![request]);

    let listings = store.list_requests().await.unwrap();
    assert_eq!(listings.len(), 1);
    assert_eq!(listings[0].mentor.id, mentor.id);
    assert_eq!(listings[0].mentor.email, "mentor@example.com");
    assert_eq!(listings[0].student.id, student.id);
    assert_eq!(listings[0].student.email, "student@example.com");
}

#[tokio::test]
async fn test_list_requests_skips_rows_with_missing_users() {
    init_test_logging();
    let mentor = seeded_user("mentor@example.com", Role::Mentor);
    // The student referenced by the request is never stored
    let request = seeded_request(mentor.id, Uuid::new_v4());

    let store = MemoryStore::with_data(vec![mentor], vec![request]);

    let listings = store.list_requests().await.unwrap();
    assert!(listings.is_empty());
}

#[tokio::test]
async fn test_delete_request_requires_owning_student() {
    init_test_logging();
    let mentor = seeded_user("mentor@example.com", Role::Mentor);
    let student = seeded_user("student@example.com", Role::Student);
    let request = seeded_request(mentor.id, student.id);
    let request_id = request.id;

    let store = MemoryStore::with_data(vec![mentor, student.clone()], vec![request]);

    // A different student removes nothing
    let removed = store
        .delete_request_for_student(request_id, Uuid::new_v4())
        .await
        .unwrap();
    assert_eq!(removed, 0);
    assert_eq!(store.list_requests().await.unwrap().len(), 1);

    // The owner removes exactly one row
    let removed = store
        .delete_request_for_student(request_id, student.id)
        .await
        .unwrap();
    assert_eq!(removed, 1);
    assert!(store.list_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_confirm_request_conditional_on_mentor() {
    init_test_logging();
    let mentor = seeded_user("mentor@example.com", Role::Mentor);
    let student = seeded_user("student@example.com", Role::Student);
    let request = seeded_request(mentor.id, student.id);
    let request_id = request.id;

    let store = MemoryStore::with_data(vec![mentor.clone(), student], vec![request]);

    // Wrong mentor: no row qualifies
    let result = store
        .confirm_request_for_mentor(request_id, Uuid::new_v4(), true)
        .await
        .unwrap();
    assert!(result.is_none());

    // Missing id: same outcome
    let result = store
        .confirm_request_for_mentor(Uuid::new_v4(), mentor.id, true)
        .await
        .unwrap();
    assert!(result.is_none());

    // Owning mentor: the flag is set and the row returned
    let updated = store
        .confirm_request_for_mentor(request_id, mentor.id, true)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.is_confirmed, Some(true));

    // Decisions are reversible
    let updated = store
        .confirm_request_for_mentor(request_id, mentor.id, false)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.is_confirmed, Some(false));
}

#[tokio::test]
async fn test_error_mode_fails_all_operations() {
    init_test_logging();
    let store = MemoryStore::new_error();

    assert!(store
        .create_user(new_user("x@example.com", Role::Student))
        .await
        .is_err());
    assert!(store.find_user_by_email("x@example.com").await.is_err());
    assert!(store.list_users().await.is_err());
    assert!(store.list_requests().await.is_err());
    assert!(store
        .delete_request_for_student(Uuid::new_v4(), Uuid::new_v4())
        .await
        .is_err());
    assert!(store
        .confirm_request_for_mentor(Uuid::new_v4(), Uuid::new_v4(), true)
        .await
        .is_err());
}
