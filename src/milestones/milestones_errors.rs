use diesel::result::Error as DieselError;
use thiserror::Error;

/// Custom error type for milestone-related operations
#[derive(Debug, Error)]
pub enum MilestoneError {
    #[error("Database error: {0}")]
    DatabaseError(String),
    #[error("Not found: {0}")]
    NotFound(String),
}

impl From<DieselError> for MilestoneError {
    fn from(err: DieselError) -> Self {
        match err {
            DieselError::NotFound => MilestoneError::NotFound("Record not found".to_string()),
            _ => MilestoneError::DatabaseError(err.to_string()),
        }
    }
}

/// Result type for milestone operations
pub type Result<T> = std::result::Result<T, MilestoneError>;
