use crate::modules::employees::core::ports::RepositoryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("employee already exists with given email: {email}")]
    ResourceExists { email: String },

    #[error("employee not found with given id: {id}")]
    NotFound { id: i64 },

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
