use std::sync::Arc;

use uuid::Uuid;

use mentorize_shared::error::{Result, ServiceError};
use mentorize_shared::models::{
    MentorshipRequest, MentorshipRequestWithUsers, NewMentorshipRequest,
};
use mentorize_shared::store::MentorshipStore;

/// Mentorship service: creates, lists, cancels and confirms requests,
/// enforcing ownership at the action boundary
pub struct MentorshipService<M> {
    store: Arc<M>,
}

impl<M> Clone for MentorshipService<M> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<M> MentorshipService<M>
where
    M: MentorshipStore,
{
    pub fn new(store: Arc<M>) -> Self {
        Self { store }
    }

    /// Creates a request bound to the authenticated student; the caller
    /// identity is never taken from body data
    pub async fn create(
        &self,
        description: String,
        duration: i32,
        mentor_id: Uuid,
        student_id: Uuid,
    ) -> Result<MentorshipRequest> {
        self.store
            .create_request(NewMentorshipRequest {
                description,
                duration,
                mentor_id,
                student_id,
            })
            .await
    }

    /// Snapshot of every request with its mentor and student projections
    pub async fn list_all(&self) -> Result<Vec<MentorshipRequestWithUsers>> {
        self.store.list_requests().await
    }

    /// Deletes at most one request owned by the student. Not-found and
    /// not-owned both come back as a zero count rather than an error.
    pub async fn cancel(&self, id: Uuid, student_id: Uuid) -> Result<u64> {
        self.store.delete_request_for_student(id, student_id).await
    }

    /// Sets the confirmation flag through a single conditional update.
    ///
    /// A missing id and a request owned by another mentor produce the same
    /// error on purpose, so callers cannot probe for foreign requests.
    pub async fn confirm(
        &self,
        id: Uuid,
        mentor_id: Uuid,
        decision: bool,
    ) -> Result<MentorshipRequest> {
        match self
            .store
            .confirm_request_for_mentor(id, mentor_id, decision)
            .await?
        {
            Some(request) => Ok(request),
            None => Err(ServiceError::NotFound(
                "Mentorship not found or unauthorized".into(),
            )),
        }
    }
}
