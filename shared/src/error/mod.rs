use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServiceError>;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Missing configuration: {0}")]
    Configuration(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

// Helper function to map sqlx errors onto the domain taxonomy
pub fn map_sqlx_error(operation: &str, err: sqlx::Error) -> ServiceError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            ServiceError::Conflict(format!("Postgres {} error: {}", operation, err))
        }
        sqlx::Error::RowNotFound => {
            ServiceError::NotFound(format!("Postgres {} error: row not found", operation))
        }
        sqlx::Error::PoolTimedOut | sqlx::Error::Io(_) => {
            ServiceError::Unavailable(format!("Postgres {} error: {}", operation, err))
        }
        _ => ServiceError::InternalError(format!("Postgres {} error: {}", operation, err)),
    }
}

impl From<serde_json::Error> for ServiceError {
    fn from(err: serde_json::Error) -> Self {
        ServiceError::InternalError(format!("JSON serialization error: {}", err))
    }
}
