use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{map_sqlx_error, Result};
use crate::models::{
    MentorshipRequest, MentorshipRequestWithUsers, NewMentorshipRequest, NewUser, User,
    UserSummary,
};
use crate::store::{MentorshipStore, UserStore};

const USER_COLUMNS: &str = "id, email, password, name, role, created_at, updated_at";
const REQUEST_COLUMNS: &str =
    "id, description, duration, mentor_id, student_id, is_confirmed, created_at, updated_at";

/// Opens a connection pool against the configured database
pub async fn connect(database_url: &str) -> Result<PgPool> {
    PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await
        .map_err(|err| map_sqlx_error("connect", err))
}

/// Postgres store for users
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn create_user(&self, user: NewUser) -> Result<User> {
        let query = format!(
            "INSERT INTO users (email, password, name, role) \
             VALUES ($1, $2, $3, $4) RETURNING {}",
            USER_COLUMNS
        );

        sqlx::query_as::<_, User>(&query)
            .bind(&user.email)
            .bind(&user.password)
            .bind(&user.name)
            .bind(user.role)
            .fetch_one(&self.pool)
            .await
            .map_err(|err| map_sqlx_error("insert user", err))
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let query = format!("SELECT {} FROM users WHERE email = $1", USER_COLUMNS);

        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|err| map_sqlx_error("select user by email", err))
    }

    async fn list_users(&self) -> Result<Vec<User>> {
        let query = format!("SELECT {} FROM users", USER_COLUMNS);

        sqlx::query_as::<_, User>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|err| map_sqlx_error("select users", err))
    }
}

/// Postgres store for mentorship requests
pub struct PgMentorshipStore {
    pool: PgPool,
}

impl PgMentorshipStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Flat row shape produced by the listing join
#[derive(sqlx::FromRow)]
struct RequestWithUsersRow {
    id: Uuid,
    description: String,
    duration: i32,
    mentor_id: Uuid,
    student_id: Uuid,
    is_confirmed: Option<bool>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    mentor_email: String,
    student_email: String,
}

impl From<RequestWithUsersRow> for MentorshipRequestWithUsers {
    fn from(row: RequestWithUsersRow) -> Self {
        Self {
            mentor: UserSummary {
                id: row.mentor_id,
                email: row.mentor_email,
            },
            student: UserSummary {
                id: row.student_id,
                email: row.student_email,
            },
            request: MentorshipRequest {
                id: row.id,
                description: row.description,
                duration: row.duration,
                mentor_id: row.mentor_id,
                student_id: row.student_id,
                is_confirmed: row.is_confirmed,
                created_at: row.created_at,
                updated_at: row.updated_at,
            },
        }
    }
}

#[async_trait]
impl MentorshipStore for PgMentorshipStore {
    async fn create_request(&self, request: NewMentorshipRequest) -> Result<MentorshipRequest> {
        let query = format!(
            "INSERT INTO mentorship_requests (description, duration, mentor_id, student_id) \
             VALUES ($1, $2, $3, $4) RETURNING {}",
            REQUEST_COLUMNS
        );

        sqlx::query_as::<_, MentorshipRequest>(&query)
            .bind(&request.description)
            .bind(request.duration)
            .bind(request.mentor_id)
            .bind(request.student_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|err| map_sqlx_error("insert mentorship request", err))
    }

    async fn list_requests(&self) -> Result<Vec<MentorshipRequestWithUsers>> {
        let rows = sqlx::query_as::<_, RequestWithUsersRow>(
            "SELECT r.id, r.description, r.duration, r.mentor_id, r.student_id, \
                    r.is_confirmed, r.created_at, r.updated_at, \
                    m.email AS mentor_email, s.email AS student_email \
             FROM mentorship_requests r \
             JOIN users m ON m.id = r.mentor_id \
             JOIN users s ON s.id = r.student_id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|err| map_sqlx_error("select mentorship requests", err))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn delete_request_for_student(&self, id: Uuid, student_id: Uuid) -> Result<u64> {
        let result = sqlx::query(
            "DELETE FROM mentorship_requests WHERE id = $1 AND student_id = $2",
        )
        .bind(id)
        .bind(student_id)
        .execute(&self.pool)
        .await
        .map_err(|err| map_sqlx_error("delete mentorship request", err))?;

        Ok(result.rows_affected())
    }

    async fn confirm_request_for_mentor(
        &self,
        id: Uuid,
        mentor_id: Uuid,
        is_confirmed: bool,
    ) -> Result<Option<MentorshipRequest>> {
        // Single conditional update: the ownership check and the write are
        // one statement, so concurrent confirms cannot interleave between
        // a read and a write
        let query = format!(
            "UPDATE mentorship_requests SET is_confirmed = $3, updated_at = now() \
             WHERE id = $1 AND mentor_id = $2 RETURNING {}",
            REQUEST_COLUMNS
        );

        sqlx::query_as::<_, MentorshipRequest>(&query)
            .bind(id)
            .bind(mentor_id)
            .bind(is_confirmed)
            .fetch_optional(&self.pool)
            .await
            .map_err(|err| map_sqlx_error("confirm mentorship request", err))
    }
}
