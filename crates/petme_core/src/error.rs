//! Error taxonomy shared by the domain and web layers.
//!
//! # Invariants
//! - Domain and web services return `ServiceError` unchanged; only the
//!   repository boundary classifies failures.

use crate::repo::RepoError;
use thiserror::Error;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// No record exists for the requested id.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },
    /// A record or field was required but absent.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// The repository itself failed.
    #[error("repository failure: {0}")]
    CollaboratorFailure(#[source] RepoError),
}

impl ServiceError {
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }

    /// Stable machine-readable kind, used by outer surfaces.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "not_found",
            Self::InvalidInput(_) => "invalid_input",
            Self::CollaboratorFailure(_) => "collaborator_failure",
        }
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound { entity, id } => Self::NotFound { entity, id },
            RepoError::MissingId { entity } => {
                Self::InvalidInput(format!("{entity} id is required"))
            }
            other => Self::CollaboratorFailure(other),
        }
    }
}
