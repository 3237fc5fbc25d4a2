use thiserror::Error;

use crate::domain::types::TypeConstraintError;

/// Errors surfaced by the persistence layer.
///
/// Transient failures are not retried here; callers see them unchanged.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Checking a connection out of the r2d2 pool failed.
    #[error("connection pool error: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),
    /// The database rejected or failed a statement.
    #[error("database error: {0}")]
    Database(#[from] diesel::result::Error),
    /// A stored row could not be converted into a domain value.
    #[error("validation error: {0}")]
    ValidationError(String),
}

impl From<TypeConstraintError> for RepositoryError {
    fn from(value: TypeConstraintError) -> Self {
        Self::ValidationError(value.to_string())
    }
}

/// Convenient alias for results returned from repository methods.
pub type RepositoryResult<T> = Result<T, RepositoryError>;
