use axum::{
    extract::{Extension, Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use mentorize_shared::auth::AuthUser;
use mentorize_shared::models::{MentorshipRequest, MentorshipRequestWithUsers};
use mentorize_shared::store::{MentorshipStore, UserStore};

use crate::error::{AppError, Result};
use crate::models::{ConfirmMentorshipRequest, CreateMentorshipRequest, RemovedCountResponse};
use crate::routes::AppState;

// POST /mentorships
pub async fn create_mentorship<U, M>(
    State(state): State<AppState<U, M>>,
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<CreateMentorshipRequest>,
) -> Result<(StatusCode, Json<MentorshipRequest>)>
where
    U: UserStore,
    M: MentorshipStore,
{
    // Boundary validation: reject incomplete payloads before service logic
    let description = payload
        .description
        .filter(|d| !d.trim().is_empty())
        .ok_or_else(|| AppError::bad_request("description is required".into()))?;

    let duration = payload
        .duration
        .filter(|d| *d > 0)
        .ok_or_else(|| AppError::bad_request("duration must be a positive number of minutes".into()))?;

    let mentor_id = payload
        .mentor_id
        .ok_or_else(|| AppError::bad_request("mentorId is required".into()))?;

    // The student is always the authenticated caller, never body data
    let created = state
        .mentorships
        .create(description, duration, mentor_id, user.user_id)
        .await?;

    Ok((StatusCode::CREATED, Json(created)))
}

// GET /mentorships
pub async fn list_mentorships<U, M>(
    State(state): State<AppState<U, M>>,
) -> Result<Json<Vec<MentorshipRequestWithUsers>>>
where
    U: UserStore,
    M: MentorshipStore,
{
    let requests = state.mentorships.list_all().await?;

    Ok(Json(requests))
}

// DELETE /mentorships/:id
pub async fn cancel_mentorship<U, M>(
    State(state): State<AppState<U, M>>,
    Path(id): Path<Uuid>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<RemovedCountResponse>>
where
    U: UserStore,
    M: MentorshipStore,
{
    // Zero removals cover both "not found" and "not owned"; the caller
    // cannot tell them apart from the count alone
    let removed_count = state.mentorships.cancel(id, user.user_id).await?;

    Ok(Json(RemovedCountResponse { removed_count }))
}

// PATCH /mentorships/:id/confirm
pub async fn confirm_mentorship<U, M>(
    State(state): State<AppState<U, M>>,
    Path(id): Path<Uuid>,
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<ConfirmMentorshipRequest>,
) -> Result<Json<MentorshipRequest>>
where
    U: UserStore,
    M: MentorshipStore,
{
    let decision = payload
        .is_confirmed
        .ok_or_else(|| AppError::bad_request("isConfirmed is required".into()))?;

    let updated = state.mentorships.confirm(id, user.user_id, decision).await?;

    Ok(Json(updated))
}
