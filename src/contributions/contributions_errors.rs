use diesel::result::Error as DieselError;
use thiserror::Error;

/// Custom error type for contribution-related operations
#[derive(Debug, Error)]
pub enum ContributionError {
    #[error("Database error: {0}")]
    DatabaseError(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl From<DieselError> for ContributionError {
    fn from(err: DieselError) -> Self {
        match err {
            DieselError::NotFound => ContributionError::NotFound("Record not found".to_string()),
            _ => ContributionError::DatabaseError(err.to_string()),
        }
    }
}

/// Result type for contribution operations
pub type Result<T> = std::result::Result<T, ContributionError>;
