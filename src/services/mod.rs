use thiserror::Error;

use crate::repository::errors::RepositoryError;

pub mod quotes;

/// Errors surfaced by service functions to the HTTP layer.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The storage layer rejected or failed the query.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// Work could not be scheduled or completed outside the storage layer.
    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
