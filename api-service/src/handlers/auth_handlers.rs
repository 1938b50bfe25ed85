use axum::{
    extract::{Extension, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use mentorize_shared::auth::AuthUser;
use mentorize_shared::models::{ErrorResponse, MessageResponse};
use mentorize_shared::store::{MentorshipStore, UserStore};

use crate::error::Result;
use crate::models::{LoginRequest, RegisterRequest, TokenResponse, UserResponse};
use crate::routes::AppState;

// POST /auth/login
pub async fn login<U, M>(
    State(state): State<AppState<U, M>>,
    Json(payload): Json<LoginRequest>,
) -> Result<Response>
where
    U: UserStore,
    M: MentorshipStore,
{
    let user = state
        .auth
        .validate_credentials(&payload.email, &payload.password)
        .await?;

    match user {
        Some(user) => {
            let access_token = state.auth.issue_session(&user)?;
            Ok(Json(TokenResponse { access_token }).into_response())
        }
        // Observed behavior: invalid credentials answer 200 with an error
        // body, identical for unknown email and wrong password
        None => Ok(Json(ErrorResponse {
            error: "Invalid credentials".to_string(),
        })
        .into_response()),
    }
}

// POST /auth/register
pub async fn register<U, M>(
    State(state): State<AppState<U, M>>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<UserResponse>)>
where
    U: UserStore,
    M: MentorshipStore,
{
    let created = state.auth.register(payload).await?;

    Ok((StatusCode::CREATED, Json(created)))
}

// POST /auth/logout
pub async fn logout(Extension(user): Extension<AuthUser>) -> Json<MessageResponse> {
    tracing::info!("User {} logged out", user.user_id);

    // Sessions are stateless bearer tokens; there is nothing to revoke
    // server-side, the client discards its copy
    Json(MessageResponse {
        message: "Logged out (frontend removes token)".to_string(),
    })
}
