//! Bidirectional conversion between adjacent record representations.
//!
//! # Responsibility
//! - Define the `Translator` capability shared by every layer boundary.
//! - Map storage records to domain entities and back.
//!
//! # Invariants
//! - Translation is a structural copy: no validation, normalization or
//!   defaulting. Absent fields stay absent.
//! - Nested animals are translated with the injected animal translator.

use crate::model::animal::Animal;
use crate::model::breed::Breed;
use crate::repo::record::{AnimalRecord, BreedRecord};

/// Converts `S` (the lower representation) into `T` (the next one up) and
/// back.
pub trait Translator<S, T> {
    fn translate_to(&self, source: &S) -> T;
    fn translate_from(&self, target: &T) -> S;
}

/// Maps `AnimalRecord` <-> `Animal`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnimalPersistenceTranslator;

impl Translator<AnimalRecord, Animal> for AnimalPersistenceTranslator {
    fn translate_to(&self, source: &AnimalRecord) -> Animal {
        Animal {
            id: source.id.clone(),
            name: source.name.clone(),
        }
    }

    fn translate_from(&self, target: &Animal) -> AnimalRecord {
        AnimalRecord {
            id: target.id.clone(),
            name: target.name.clone(),
        }
    }
}

/// Maps `BreedRecord` <-> `Breed`, delegating the nested animal to `A`.
#[derive(Debug, Clone, Default)]
pub struct BreedPersistenceTranslator<A = AnimalPersistenceTranslator> {
    animal_translator: A,
}

impl<A> BreedPersistenceTranslator<A>
where
    A: Translator<AnimalRecord, Animal>,
{
    pub fn new(animal_translator: A) -> Self {
        Self { animal_translator }
    }
}

impl<A> Translator<BreedRecord, Breed> for BreedPersistenceTranslator<A>
where
    A: Translator<AnimalRecord, Animal>,
{
    fn translate_to(&self, source: &BreedRecord) -> Breed {
        Breed {
            id: source.id.clone(),
            name: source.name.clone(),
            animal: source
                .animal
                .as_ref()
                .map(|animal| self.animal_translator.translate_to(animal)),
        }
    }

    fn translate_from(&self, target: &Breed) -> BreedRecord {
        BreedRecord {
            id: target.id.clone(),
            name: target.name.clone(),
            animal: target
                .animal
                .as_ref()
                .map(|animal| self.animal_translator.translate_from(animal)),
        }
    }
}
