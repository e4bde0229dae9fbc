use thiserror::Error;

#[derive(Error, Debug)]
pub enum RevisionError {
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

pub type RevisionResult<T> = Result<T, RevisionError>;
