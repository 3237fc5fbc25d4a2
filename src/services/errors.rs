use thiserror::Error;

use crate::repository::errors::RepositoryError;

/// Generic error type used by service layer functions.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Requested product was not found.
    #[error("not found")]
    NotFound,
    /// The persistence layer failed; carried unchanged for the caller.
    #[error("storage failure: {0}")]
    Storage(#[from] RepositoryError),
}

/// Convenient alias for results returned from service functions.
pub type ServiceResult<T> = Result<T, ServiceError>;
