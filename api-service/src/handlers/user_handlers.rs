use axum::{extract::State, Json};

use mentorize_shared::store::{MentorshipStore, UserStore};

use crate::error::Result;
use crate::models::UserResponse;
use crate::routes::AppState;

// GET /users
pub async fn list_users<U, M>(
    State(state): State<AppState<U, M>>,
) -> Result<Json<Vec<UserResponse>>>
where
    U: UserStore,
    M: MentorshipStore,
{
    let users = state.user_store.list_users().await?;

    // Password digests never leave the store layer
    let users: Vec<_> = users.into_iter().map(UserResponse::from).collect();

    Ok(Json(users))
}
