use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("resource not found")]
    NotFound,

    #[error("invalid input: {0}")]
    Invalid(String),

    #[error("internal server error")]
    InternalServerError,
}
