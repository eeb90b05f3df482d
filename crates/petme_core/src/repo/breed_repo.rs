//! Breed repository contract and SQLite implementation.
//!
//! # Invariants
//! - A breed stores a copy of its animal's `id` and `name`; the `animals`
//!   table is never read or written from here.
//! - `get_by_animal` matches on the animal id only.

use super::record::{AnimalRecord, BreedRecord};
use super::{ensure_bootstrapped, require_id, RepoError, RepoResult};
use rusqlite::{params, Connection, OptionalExtension, Row};
use uuid::Uuid;

const ENTITY: &str = "breed";

const BREED_SELECT_SQL: &str = "SELECT id, name, animal_id, animal_name FROM breeds";

/// Data access contract for breed records.
#[cfg_attr(test, mockall::automock)]
pub trait BreedRepository {
    fn get_all(&self) -> RepoResult<Vec<BreedRecord>>;
    fn get_one(&self, id: &str) -> RepoResult<Option<BreedRecord>>;
    fn create(&self, record: &BreedRecord) -> RepoResult<BreedRecord>;
    fn update(&self, record: &BreedRecord) -> RepoResult<BreedRecord>;
    fn delete(&self, record: &BreedRecord) -> RepoResult<()>;
    /// Returns every breed referencing `animal`, in insertion order.
    fn get_by_animal(&self, animal: &AnimalRecord) -> RepoResult<Vec<BreedRecord>>;
}

/// SQLite-backed breed repository.
pub struct SqliteBreedRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteBreedRepository<'conn> {
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_bootstrapped(conn)?;
        Ok(Self { conn })
    }
}

impl BreedRepository for SqliteBreedRepository<'_> {
    fn get_all(&self) -> RepoResult<Vec<BreedRecord>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{BREED_SELECT_SQL} ORDER BY rowid ASC"))?;
        let records = stmt
            .query_map([], parse_breed_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(records)
    }

    fn get_one(&self, id: &str) -> RepoResult<Option<BreedRecord>> {
        let record = self
            .conn
            .query_row(
                &format!("{BREED_SELECT_SQL} WHERE id = ?1"),
                [id],
                parse_breed_row,
            )
            .optional()?;
        Ok(record)
    }

    fn create(&self, record: &BreedRecord) -> RepoResult<BreedRecord> {
        let id = record
            .id
            .clone()
            .unwrap_or_else(|| Uuid::new_v4().to_string());
        let (animal_id, animal_name) = animal_columns(record.animal.as_ref());

        self.conn.execute(
            "INSERT INTO breeds (id, name, animal_id, animal_name) VALUES (?1, ?2, ?3, ?4)
             ON CONFLICT (id) DO UPDATE SET
                name = excluded.name,
                animal_id = excluded.animal_id,
                animal_name = excluded.animal_name;",
            params![id, record.name.as_deref(), animal_id, animal_name],
        )?;

        Ok(BreedRecord {
            id: Some(id),
            ..record.clone()
        })
    }

    fn update(&self, record: &BreedRecord) -> RepoResult<BreedRecord> {
        let id = require_id(record.id.as_deref(), ENTITY)?;
        let (animal_id, animal_name) = animal_columns(record.animal.as_ref());

        let changed = self.conn.execute(
            "UPDATE breeds
             SET name = ?1, animal_id = ?2, animal_name = ?3
             WHERE id = ?4;",
            params![record.name.as_deref(), animal_id, animal_name, id],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound {
                entity: ENTITY,
                id: id.to_string(),
            });
        }

        Ok(record.clone())
    }

    fn delete(&self, record: &BreedRecord) -> RepoResult<()> {
        let id = require_id(record.id.as_deref(), ENTITY)?;
        self.conn.execute("DELETE FROM breeds WHERE id = ?1;", [id])?;
        Ok(())
    }

    fn get_by_animal(&self, animal: &AnimalRecord) -> RepoResult<Vec<BreedRecord>> {
        let animal_id = require_id(animal.id.as_deref(), "animal")?;
        let mut stmt = self.conn.prepare(&format!(
            "{BREED_SELECT_SQL} WHERE animal_id = ?1 ORDER BY rowid ASC"
        ))?;
        let records = stmt
            .query_map([animal_id], parse_breed_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(records)
    }
}

fn animal_columns(animal: Option<&AnimalRecord>) -> (Option<&str>, Option<&str>) {
    match animal {
        Some(animal) => (animal.id.as_deref(), animal.name.as_deref()),
        None => (None, None),
    }
}

fn parse_breed_row(row: &Row<'_>) -> rusqlite::Result<BreedRecord> {
    let animal_id: Option<String> = row.get("animal_id")?;
    let animal_name: Option<String> = row.get("animal_name")?;
    let animal = match (animal_id, animal_name) {
        (None, None) => None,
        (id, name) => Some(AnimalRecord { id, name }),
    };

    Ok(BreedRecord {
        id: Some(row.get("id")?),
        name: row.get("name")?,
        animal,
    })
}
