use std::sync::Arc;

use mentorize_shared::auth::{self, JwtKeys};
use mentorize_shared::error::Result;
use mentorize_shared::models::NewUser;
use mentorize_shared::store::UserStore;

use crate::models::{RegisterRequest, UserResponse};

/// Credential service: validates logins, issues session tokens and
/// registers new accounts with hashed passwords
pub struct AuthService<U> {
    store: Arc<U>,
    keys: JwtKeys,
    bcrypt_cost: u32,
}

impl<U> Clone for AuthService<U> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            keys: self.keys.clone(),
            bcrypt_cost: self.bcrypt_cost,
        }
    }
}

impl<U> AuthService<U>
where
    U: UserStore,
{
    pub fn new(store: Arc<U>, keys: JwtKeys, bcrypt_cost: u32) -> Self {
        Self {
            store,
            keys,
            bcrypt_cost,
        }
    }

    /// Checks the supplied credentials against the stored digest.
    ///
    /// Absence of a match is a normal outcome, never an error: the caller
    /// cannot tell an unknown email from a wrong password.
    pub async fn validate_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<UserResponse>> {
        let user = match self.store.find_user_by_email(email).await? {
            Some(user) => user,
            None => return Ok(None),
        };

        if !auth::verify_password(password, &user.password) {
            return Ok(None);
        }

        Ok(Some(UserResponse::from(user)))
    }

    /// Issues a signed bearer token carrying the user's id and email
    pub fn issue_session(&self, user: &UserResponse) -> Result<String> {
        auth::issue_token(&self.keys, user.id, &user.email)
    }

    /// Hashes the candidate password and persists the new account.
    ///
    /// No uniqueness pre-check happens here; a duplicate email surfaces as
    /// a Conflict from the store. The returned record carries no digest.
    pub async fn register(&self, candidate: RegisterRequest) -> Result<UserResponse> {
        let hashed = auth::hash_password(&candidate.password, self.bcrypt_cost)?;

        let created = self
            .store
            .create_user(NewUser {
                email: candidate.email,
                password: hashed,
                name: candidate.name,
                role: candidate.role,
            })
            .await?;

        tracing::info!("Registered user {}", created.id);

        Ok(UserResponse::from(created))
    }
}
