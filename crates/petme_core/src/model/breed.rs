//! Breed domain entity.

use super::animal::Animal;

/// A breed of one animal, e.g. "Golden Retriever" of "Dog".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Breed {
    pub id: Option<String>,
    pub name: Option<String>,
    /// The animal this breed belongs to. Copied, never owned.
    pub animal: Option<Animal>,
}

impl Breed {
    /// Creates a breed with a known identity belonging to `animal`.
    pub fn new(id: impl Into<String>, name: impl Into<String>, animal: Animal) -> Self {
        Self {
            id: Some(id.into()),
            name: Some(name.into()),
            animal: Some(animal),
        }
    }

    /// Creates a breed that has not been stored yet.
    pub fn unsaved(name: impl Into<String>, animal: Animal) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
            animal: Some(animal),
        }
    }
}
