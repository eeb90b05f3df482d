//! Core domain logic for PetMe.
//!
//! Holds the domain entities and services, the repository layer with its
//! SQLite implementation, and the translators between them. Web-facing DTOs
//! live in `petme_web`.

pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod translator;

pub use config::{ConfigError, PetmeConfig};
pub use error::{ServiceError, ServiceResult};
pub use logging::{default_log_level, init_logging, init_stderr_logging, logging_status};
pub use model::animal::Animal;
pub use model::breed::Breed;
pub use repo::animal_repo::{AnimalRepository, SqliteAnimalRepository};
pub use repo::breed_repo::{BreedRepository, SqliteBreedRepository};
pub use repo::record::{AnimalRecord, BreedRecord};
pub use repo::{RepoError, RepoResult};
pub use service::animal_service::{AnimalDomainService, AnimalService};
pub use service::breed_service::{BreedDomainService, BreedService};
pub use translator::{AnimalPersistenceTranslator, BreedPersistenceTranslator, Translator};

/// Minimal health-check API for wiring checks.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
