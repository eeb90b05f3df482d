//! Animal repository contract and SQLite implementation.

use super::record::AnimalRecord;
use super::{ensure_bootstrapped, require_id, RepoError, RepoResult};
use rusqlite::{params, Connection, OptionalExtension, Row};
use uuid::Uuid;

const ENTITY: &str = "animal";

const ANIMAL_SELECT_SQL: &str = "SELECT id, name FROM animals";

/// Data access contract for animal records.
#[cfg_attr(test, mockall::automock)]
pub trait AnimalRepository {
    /// Returns every animal in insertion order.
    fn get_all(&self) -> RepoResult<Vec<AnimalRecord>>;
    fn get_one(&self, id: &str) -> RepoResult<Option<AnimalRecord>>;
    /// Saves the record, assigning an id when absent and overwriting an
    /// existing row with the same id.
    fn create(&self, record: &AnimalRecord) -> RepoResult<AnimalRecord>;
    /// Updates an existing row; `NotFound` when no row has this id.
    fn update(&self, record: &AnimalRecord) -> RepoResult<AnimalRecord>;
    /// Deletes by id. Unknown ids are a no-op.
    fn delete(&self, record: &AnimalRecord) -> RepoResult<()>;
}

/// SQLite-backed animal repository.
pub struct SqliteAnimalRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteAnimalRepository<'conn> {
    /// Wraps a connection opened through `open_db*`.
    ///
    /// # Errors
    /// - `UninitializedConnection` when migrations were not applied.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_bootstrapped(conn)?;
        Ok(Self { conn })
    }
}

impl AnimalRepository for SqliteAnimalRepository<'_> {
    fn get_all(&self) -> RepoResult<Vec<AnimalRecord>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{ANIMAL_SELECT_SQL} ORDER BY rowid ASC"))?;
        let records = stmt
            .query_map([], parse_animal_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(records)
    }

    fn get_one(&self, id: &str) -> RepoResult<Option<AnimalRecord>> {
        let record = self
            .conn
            .query_row(
                &format!("{ANIMAL_SELECT_SQL} WHERE id = ?1"),
                [id],
                parse_animal_row,
            )
            .optional()?;
        Ok(record)
    }

    fn create(&self, record: &AnimalRecord) -> RepoResult<AnimalRecord> {
        let id = record
            .id
            .clone()
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        self.conn.execute(
            "INSERT INTO animals (id, name) VALUES (?1, ?2)
             ON CONFLICT (id) DO UPDATE SET name = excluded.name;",
            params![id, record.name.as_deref()],
        )?;

        Ok(AnimalRecord {
            id: Some(id),
            name: record.name.clone(),
        })
    }

    fn update(&self, record: &AnimalRecord) -> RepoResult<AnimalRecord> {
        let id = require_id(record.id.as_deref(), ENTITY)?;

        let changed = self.conn.execute(
            "UPDATE animals SET name = ?1 WHERE id = ?2;",
            params![record.name.as_deref(), id],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound {
                entity: ENTITY,
                id: id.to_string(),
            });
        }

        Ok(record.clone())
    }

    fn delete(&self, record: &AnimalRecord) -> RepoResult<()> {
        let id = require_id(record.id.as_deref(), ENTITY)?;
        self.conn
            .execute("DELETE FROM animals WHERE id = ?1;", [id])?;
        Ok(())
    }
}

fn parse_animal_row(row: &Row<'_>) -> rusqlite::Result<AnimalRecord> {
    Ok(AnimalRecord {
        id: Some(row.get("id")?),
        name: row.get("name")?,
    })
}
