//! Storage-layer records as read from and written to SQLite.

/// Row of the `animals` table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnimalRecord {
    pub id: Option<String>,
    pub name: Option<String>,
}

/// Row of the `breeds` table with its embedded animal copy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BreedRecord {
    pub id: Option<String>,
    pub name: Option<String>,
    /// Stored in `animal_id`/`animal_name`; both NULL reads back as `None`.
    pub animal: Option<AnimalRecord>,
}
