use diesel::result::Error as DieselError;
use thiserror::Error;

/// Custom error type for share-link operations. Resolution failures are
/// typed so callers can tell a dead link from a missing one.
#[derive(Debug, Error)]
pub enum LinkError {
    #[error("Database error: {0}")]
    DatabaseError(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Link has expired: {0}")]
    Expired(String),
    #[error("Link has been revoked: {0}")]
    Revoked(String),
    #[error("Link has no uses left: {0}")]
    Exhausted(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl From<DieselError> for LinkError {
    fn from(err: DieselError) -> Self {
        match err {
            DieselError::NotFound => LinkError::NotFound("Record not found".to_string()),
            _ => LinkError::DatabaseError(err.to_string()),
        }
    }
}

/// Result type for share-link operations
pub type Result<T> = std::result::Result<T, LinkError>;
