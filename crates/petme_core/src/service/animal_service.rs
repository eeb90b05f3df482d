//! Animal domain service.

use crate::error::{ServiceError, ServiceResult};
use crate::model::animal::Animal;
use crate::repo::animal_repo::AnimalRepository;
use crate::repo::record::AnimalRecord;
use crate::translator::{AnimalPersistenceTranslator, Translator};
use super::failed;
use log::debug;

/// CRUD use cases over animals.
pub trait AnimalDomainService {
    /// Returns every stored animal in insertion order.
    fn get_all(&self) -> ServiceResult<Vec<Animal>>;

    /// Returns the animal stored under `id`.
    ///
    /// # Errors
    /// - `NotFound` when no animal has that id.
    fn get_one(&self, id: &str) -> ServiceResult<Animal>;

    /// Stores `animal`, overwriting any animal with the same id. The store
    /// assigns an id when `animal.id` is `None`.
    fn create(&self, animal: &Animal) -> ServiceResult<Animal>;

    /// Replaces the stored animal with the same id.
    ///
    /// # Errors
    /// - `InvalidInput` when `animal.id` is `None`.
    /// - `NotFound` when no animal has that id.
    fn update(&self, animal: &Animal) -> ServiceResult<Animal>;

    /// Removes the animal with the same id; unknown ids are a no-op.
    ///
    /// # Errors
    /// - `InvalidInput` when `animal.id` is `None`.
    fn delete(&self, animal: &Animal) -> ServiceResult<()>;
}

/// Repository-backed `AnimalDomainService`.
pub struct AnimalService<R, T = AnimalPersistenceTranslator> {
    repo: R,
    translator: T,
}

impl<R, T> AnimalService<R, T>
where
    R: AnimalRepository,
    T: Translator<AnimalRecord, Animal>,
{
    pub fn new(repo: R, translator: T) -> Self {
        Self { repo, translator }
    }
}

impl<R> AnimalService<R>
where
    R: AnimalRepository,
{
    /// Wires the persistence translator used in production.
    pub fn with_default_translator(repo: R) -> Self {
        Self::new(repo, AnimalPersistenceTranslator)
    }
}

impl<R, T> AnimalDomainService for AnimalService<R, T>
where
    R: AnimalRepository,
    T: Translator<AnimalRecord, Animal>,
{
    fn get_all(&self) -> ServiceResult<Vec<Animal>> {
        let records = self.repo.get_all().map_err(|err| failed("animal_get_all", err))?;
        debug!(
            "event=animal_get_all module=domain status=ok count={}",
            records.len()
        );
        Ok(records
            .iter()
            .map(|record| self.translator.translate_to(record))
            .collect())
    }

    fn get_one(&self, id: &str) -> ServiceResult<Animal> {
        let record = self
            .repo
            .get_one(id)
            .map_err(|err| failed("animal_get_one", err))?
            .ok_or_else(|| ServiceError::not_found("animal", id))?;
        debug!("event=animal_get_one module=domain status=ok id={id}");
        Ok(self.translator.translate_to(&record))
    }

    fn create(&self, animal: &Animal) -> ServiceResult<Animal> {
        let record = self.translator.translate_from(animal);
        let created = self
            .repo
            .create(&record)
            .map_err(|err| failed("animal_create", err))?;
        debug!(
            "event=animal_create module=domain status=ok id={}",
            created.id.as_deref().unwrap_or_default()
        );
        Ok(self.translator.translate_to(&created))
    }

    fn update(&self, animal: &Animal) -> ServiceResult<Animal> {
        let record = self.translator.translate_from(animal);
        let updated = self
            .repo
            .update(&record)
            .map_err(|err| failed("animal_update", err))?;
        debug!(
            "event=animal_update module=domain status=ok id={}",
            updated.id.as_deref().unwrap_or_default()
        );
        Ok(self.translator.translate_to(&updated))
    }

    fn delete(&self, animal: &Animal) -> ServiceResult<()> {
        let record = self.translator.translate_from(animal);
        self.repo
            .delete(&record)
            .map_err(|err| failed("animal_delete", err))?;
        debug!(
            "event=animal_delete module=domain status=ok id={}",
            record.id.as_deref().unwrap_or_default()
        );
        Ok(())
    }
}
