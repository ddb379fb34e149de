use models::errors::ModelError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("{0}")]
    Forbidden(String),
    #[error("{0}")]
    NotFound(String),
    #[error("database error: {0}")]
    Db(String),
    #[error("model error: {0}")]
    Model(#[from] ModelError),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }

    pub fn forbidden(message: impl Into<String>) -> Self { Self::Forbidden(message.into()) }

    /// HTTP-style status for transport mapping.
    pub fn code(&self) -> u16 {
        match self {
            ServiceError::Validation(_) | ServiceError::Model(_) => 400,
            ServiceError::Forbidden(_) => 403,
            ServiceError::NotFound(_) => 404,
            ServiceError::Db(_) => 500,
        }
    }

    /// Bare message without the variant prefix.
    pub fn message(&self) -> String {
        match self {
            ServiceError::Validation(m)
            | ServiceError::Forbidden(m)
            | ServiceError::NotFound(m)
            | ServiceError::Db(m) => m.clone(),
            ServiceError::Model(ModelError::Validation(m)) => m.clone(),
        }
    }
}
