use async_trait::async_trait;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{
    MentorshipRequest, MentorshipRequestWithUsers, NewMentorshipRequest, NewUser, User,
};

// Expose the Postgres store module
pub mod postgres;

/// UserStore trait defining the interface for user persistence
#[async_trait]
pub trait UserStore: Send + Sync + 'static {
    /// Persists a new user; a taken email surfaces as a Conflict
    async fn create_user(&self, user: NewUser) -> Result<User>;

    /// Looks up a user by email; absence is a normal outcome, not an error
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>>;

    /// Gets all users
    async fn list_users(&self) -> Result<Vec<User>>;
}

/// MentorshipStore trait defining the interface for request persistence
#[async_trait]
pub trait MentorshipStore: Send + Sync + 'static {
    /// Persists a new mentorship request in the pending state
    async fn create_request(&self, request: NewMentorshipRequest) -> Result<MentorshipRequest>;

    /// Gets all requests joined with their mentor and student projections
    async fn list_requests(&self) -> Result<Vec<MentorshipRequestWithUsers>>;

    /// Deletes the request only when it is owned by the given student;
    /// returns the number of rows removed (0 or 1)
    async fn delete_request_for_student(&self, id: Uuid, student_id: Uuid) -> Result<u64>;

    /// Atomically sets the confirmation flag where both id and mentor
    /// match; returns None when no row qualifies
    async fn confirm_request_for_mentor(
        &self,
        id: Uuid,
        mentor_id: Uuid,
        is_confirmed: bool,
    ) -> Result<Option<MentorshipRequest>>;
}
