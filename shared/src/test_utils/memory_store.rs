use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::error::{Result, ServiceError};
use crate::models::{
    MentorshipRequest, MentorshipRequestWithUsers, NewMentorshipRequest, NewUser, User,
    UserSummary,
};
use crate::store::{MentorshipStore, UserStore};

/// In-memory implementation of both stores for testing.
///
/// A single instance backs `UserStore` and `MentorshipStore` so the listing
/// join sees the same users the credential side registered.
pub struct MemoryStore {
    users: Mutex<HashMap<Uuid, User>>,
    requests: Mutex<HashMap<Uuid, MentorshipRequest>>,
    error_mode: bool,
}

impl MemoryStore {
    /// Create a new empty MemoryStore
    pub fn new() -> Self {
        Self {
            users: Mutex::new(HashMap::new()),
            requests: Mutex::new(HashMap::new()),
            error_mode: false,
        }
    }

    /// Create a MemoryStore with initial data
    pub fn with_data(users: Vec<User>, requests: Vec<MentorshipRequest>) -> Self {
        let store = Self::new();

        for user in users {
            store.users.lock().unwrap().insert(user.id, user);
        }
        for request in requests {
            store.requests.lock().unwrap().insert(request.id, request);
        }

        store
    }

    /// Create a new MemoryStore in error mode where all operations fail
    pub fn new_error() -> Self {
        Self {
            users: Mutex::new(HashMap::new()),
            requests: Mutex::new(HashMap::new()),
            error_mode: true,
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn create_user(&self, user: NewUser) -> Result<User> {
        if self.error_mode {
            return Err(ServiceError::InternalError("Mock".into()));
        }
        let mut users = self.users.lock().unwrap();

        // The persistence layer owns the unique-email constraint
        if users.values().any(|u| u.email == user.email) {
            return Err(ServiceError::Conflict(format!(
                "Email already registered: {}",
                user.email
            )));
        }

        let now = Utc::now();
        let record = User {
            id: Uuid::new_v4(),
            email: user.email,
            password: user.password,
            name: user.name,
            role: user.role,
            created_at: now,
            updated_at: now,
        };

        users.insert(record.id, record.clone());
        Ok(record)
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>> {
        if self.error_mode {
            return Err(ServiceError::InternalError("Mock".into()));
        }
        let user = self
            .users
            .lock()
            .unwrap()
            .values()
            .find(|u| u.email == email)
            .cloned();

        Ok(user)
    }

    async fn list_users(&self) -> Result<Vec<User>> {
        if self.error_mode {
            return Err(ServiceError::InternalError("Mock".into()));
        }
        let users = self.users.lock().unwrap().values().cloned().collect();

        Ok(users)
    }
}

#[async_trait]
impl MentorshipStore for MemoryStore {
    async fn create_request(&self, request: NewMentorshipRequest) -> Result<MentorshipRequest> {
        if self.error_mode {
            return Err(ServiceError::InternalError("Mock".into()));
        }
        let now = Utc::now();
        let record = MentorshipRequest {
            id: Uuid::new_v4(),
            description: request.description,
            duration: request.duration,
            mentor_id: request.mentor_id,
            student_id: request.student_id,
            is_confirmed: None,
            created_at: now,
            updated_at: now,
        };

        self.requests
            .lock()
            .unwrap()
            .insert(record.id, record.clone());

        Ok(record)
    }

    async fn list_requests(&self) -> Result<Vec<MentorshipRequestWithUsers>> {
        if self.error_mode {
            return Err(ServiceError::InternalError("Mock".into()));
        }
        let users = self.users.lock().unwrap();

        // Inner-join semantics: requests whose users are gone are skipped,
        // matching what the SQL join produces
        let listings = self
            .requests
            .lock()
            .unwrap()
            .values()
            .filter_map(|request| {
                let mentor = users.get(&request.mentor_id)?;
                let student = users.get(&request.student_id)?;
                Some(MentorshipRequestWithUsers {
                    request: request.clone(),
                    mentor: UserSummary {
                        id: mentor.id,
                        email: mentor.email.clone(),
                    },
                    student: UserSummary {
                        id: student.id,
                        email: student.email.clone(),
                    },
                })
            })
            .collect();

        Ok(listings)
    }

    async fn delete_request_for_student(&self, id: Uuid, student_id: Uuid) -> Result<u64> {
        if self.error_mode {
            return Err(ServiceError::InternalError("Mock".into()));
        }
        let mut requests = self.requests.lock().unwrap();

        let removed = match requests.get(&id) {
            Some(request) if request.student_id == student_id => {
                requests.remove(&id);
                1
            }
            _ => 0,
        };

        Ok(removed)
    }

    async fn confirm_request_for_mentor(
        &self,
        id: Uuid,
        mentor_id: Uuid,
        is_confirmed: bool,
    ) -> Result<Option<MentorshipRequest>> {
        if self.error_mode {
            return Err(ServiceError::InternalError("Mock".into()));
        }
        let mut requests = self.requests.lock().unwrap();

        // Check and write under one lock, mirroring the conditional UPDATE
        match requests.get_mut(&id) {
            Some(request) if request.mentor_id == mentor_id => {
                request.is_confirmed = Some(is_confirmed);
                request.updated_at = Utc::now();
                Ok(Some(request.clone()))
            }
            _ => Ok(None),
        }
    }
}
