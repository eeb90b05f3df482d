//! Domain services.
//!
//! # Responsibility
//! - Expose CRUD use cases over domain entities.
//! - Translate between domain entities and repository records around every
//!   repository call.
//!
//! # Invariants
//! - Services hold only collaborators injected at construction.
//! - Service layer remains storage-agnostic.

pub mod animal_service;
pub mod breed_service;

use crate::error::ServiceError;
use crate::repo::RepoError;
use log::warn;

/// Logs a repository failure for `event` and classifies it.
pub(crate) fn failed(event: &str, err: RepoError) -> ServiceError {
    warn!("event={event} module=domain status=error error={err}");
    err.into()
}
