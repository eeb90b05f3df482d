//! Breed domain service.
//!
//! # Invariants
//! - The nested animal of every breed goes through the breed translator, which
//!   delegates to the animal translator.
//! - `get_by_animal` translates the query animal with the standalone animal
//!   translator before hitting the repository.

use crate::error::{ServiceError, ServiceResult};
use crate::model::animal::Animal;
use crate::model::breed::Breed;
use crate::repo::breed_repo::BreedRepository;
use crate::repo::record::{AnimalRecord, BreedRecord};
use crate::translator::{AnimalPersistenceTranslator, BreedPersistenceTranslator, Translator};
use super::failed;
use log::debug;

/// CRUD use cases over breeds, plus lookup by owning animal.
pub trait BreedDomainService {
    /// Returns every stored breed in insertion order, each with its animal.
    fn get_all(&self) -> ServiceResult<Vec<Breed>>;

    /// Returns the breed stored under `id`.
    ///
    /// # Errors
    /// - `NotFound` when no breed has that id.
    fn get_one(&self, id: &str) -> ServiceResult<Breed>;

    /// Stores `breed` with a copy of its animal, overwriting any breed with
    /// the same id. The store assigns an id when `breed.id` is `None`.
    fn create(&self, breed: &Breed) -> ServiceResult<Breed>;

    /// Replaces name and animal of the stored breed with the same id.
    ///
    /// # Errors
    /// - `InvalidInput` when `breed.id` is `None`.
    /// - `NotFound` when no breed has that id.
    fn update(&self, breed: &Breed) -> ServiceResult<Breed>;

    /// Removes the breed with the same id; unknown ids are a no-op.
    ///
    /// # Errors
    /// - `InvalidInput` when `breed.id` is `None`.
    fn delete(&self, breed: &Breed) -> ServiceResult<()>;

    /// Returns the breeds whose animal id equals `animal.id`, in insertion
    /// order. The animal name is ignored.
    ///
    /// # Errors
    /// - `InvalidInput` when `animal.id` is `None`.
    fn get_by_animal(&self, animal: &Animal) -> ServiceResult<Vec<Breed>>;
}

/// Repository-backed `BreedDomainService`.
pub struct BreedService<
    R,
    BT = BreedPersistenceTranslator,
    AT = AnimalPersistenceTranslator,
> {
    repo: R,
    breed_translator: BT,
    animal_translator: AT,
}

impl<R, BT, AT> BreedService<R, BT, AT>
where
    R: BreedRepository,
    BT: Translator<BreedRecord, Breed>,
    AT: Translator<AnimalRecord, Animal>,
{
    /// `breed_translator` maps whole breeds including their animal;
    /// `animal_translator` maps the query of `get_by_animal`.
    pub fn new(repo: R, breed_translator: BT, animal_translator: AT) -> Self {
        Self {
            repo,
            breed_translator,
            animal_translator,
        }
    }

    fn translate_all(&self, records: &[BreedRecord]) -> Vec<Breed> {
        records
            .iter()
            .map(|record| self.breed_translator.translate_to(record))
            .collect()
    }
}

impl<R> BreedService<R>
where
    R: BreedRepository,
{
    /// Wires the persistence translators used in production.
    pub fn with_default_translators(repo: R) -> Self {
        Self::new(
            repo,
            BreedPersistenceTranslator::new(AnimalPersistenceTranslator),
            AnimalPersistenceTranslator,
        )
    }
}

impl<R, BT, AT> BreedDomainService for BreedService<R, BT, AT>
where
    R: BreedRepository,
    BT: Translator<BreedRecord, Breed>,
    AT: Translator<AnimalRecord, Animal>,
{
    fn get_all(&self) -> ServiceResult<Vec<Breed>> {
        let records = self.repo.get_all().map_err(|err| failed("breed_get_all", err))?;
        debug!(
            "event=breed_get_all module=domain status=ok count={}",
            records.len()
        );
        Ok(self.translate_all(&records))
    }

    fn get_one(&self, id: &str) -> ServiceResult<Breed> {
        let record = self
            .repo
            .get_one(id)
            .map_err(|err| failed("breed_get_one", err))?
            .ok_or_else(|| ServiceError::not_found("breed", id))?;
        debug!("event=breed_get_one module=domain status=ok id={id}");
        Ok(self.breed_translator.translate_to(&record))
    }

    fn create(&self, breed: &Breed) -> ServiceResult<Breed> {
        let record = self.breed_translator.translate_from(breed);
        let created = self
            .repo
            .create(&record)
            .map_err(|err| failed("breed_create", err))?;
        debug!(
            "event=breed_create module=domain status=ok id={}",
            created.id.as_deref().unwrap_or_default()
        );
        Ok(self.breed_translator.translate_to(&created))
    }

    fn update(&self, breed: &Breed) -> ServiceResult<Breed> {
        let record = self.breed_translator.translate_from(breed);
        let updated = self
            .repo
            .update(&record)
            .map_err(|err| failed("breed_update", err))?;
        debug!(
            "event=breed_update module=domain status=ok id={}",
            updated.id.as_deref().unwrap_or_default()
        );
        Ok(self.breed_translator.translate_to(&updated))
    }

    fn delete(&self, breed: &Breed) -> ServiceResult<()> {
        let record = self.breed_translator.translate_from(breed);
        self.repo
            .delete(&record)
            .map_err(|err| failed("breed_delete", err))?;
        debug!(
            "event=breed_delete module=domain status=ok id={}",
            record.id.as_deref().unwrap_or_default()
        );
        Ok(())
    }

    fn get_by_animal(&self, animal: &Animal) -> ServiceResult<Vec<Breed>> {
        let animal_record = self.animal_translator.translate_from(animal);
        let records = self
            .repo
            .get_by_animal(&animal_record)
            .map_err(|err| failed("breed_get_by_animal", err))?;
        debug!(
            "event=breed_get_by_animal module=domain status=ok animal_id={} count={}",
            animal_record.id.as_deref().unwrap_or_default(),
            records.len()
        );
        Ok(self.translate_all(&records))
    }
}
