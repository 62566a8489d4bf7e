use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Invalid input")]
    Invalid,

    #[error("External service error: {0}")]
    ExternalServiceError(String),
}
