//! Repository layer: storage records, data access contracts and their SQLite
//! implementations.
//!
//! # Responsibility
//! - Define the persistence representation of animals and breeds.
//! - Isolate SQL details from domain orchestration.
//!
//! # Invariants
//! - Repository APIs return semantic errors (`NotFound`, `MissingId`) in
//!   addition to DB transport errors.
//! - List operations return rows in insertion order.

use crate::db::migrations::{current_version, latest_version};
use crate::db::DbError;
use rusqlite::Connection;
use thiserror::Error;

pub mod animal_repo;
pub mod breed_repo;
pub mod record;

pub type RepoResult<T> = Result<T, RepoError>;

/// Persistence failures shared by every repository.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error(transparent)]
    Db(#[from] DbError),
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },
    #[error("{entity} record has no id")]
    MissingId { entity: &'static str },
    #[error(
        "connection is not bootstrapped: schema version {actual_version}, expected {expected_version}"
    )]
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Rejects connections that did not go through `open_db*`.
fn ensure_bootstrapped(conn: &Connection) -> RepoResult<()> {
    let actual_version = current_version(conn)?;
    let expected_version = latest_version();
    if actual_version != expected_version {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }
    Ok(())
}

fn require_id<'a>(id: Option<&'a str>, entity: &'static str) -> RepoResult<&'a str> {
    id.ok_or(RepoError::MissingId { entity })
}
