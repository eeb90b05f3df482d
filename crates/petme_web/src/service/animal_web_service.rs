//! Animal web service.

use crate::dto::AnimalDto;
use crate::translator::AnimalWebTranslator;
use petme_core::{Animal, AnimalDomainService, ServiceResult, Translator};

/// Forwards DTO calls to an `AnimalDomainService`.
pub struct AnimalWebService<D, T = AnimalWebTranslator> {
    domain: D,
    translator: T,
}

impl<D, T> AnimalWebService<D, T>
where
    D: AnimalDomainService,
    T: Translator<Animal, AnimalDto>,
{
    pub fn new(domain: D, translator: T) -> Self {
        Self { domain, translator }
    }

    /// All animals as DTOs, in domain order.
    pub fn get_all(&self) -> ServiceResult<Vec<AnimalDto>> {
        Ok(self
            .domain
            .get_all()?
            .iter()
            .map(|animal| self.translator.translate_to(animal))
            .collect())
    }

    /// # Errors
    /// - `NotFound` when no animal has `id`.
    pub fn get_one(&self, id: &str) -> ServiceResult<AnimalDto> {
        let animal = self.domain.get_one(id)?;
        Ok(self.translator.translate_to(&animal))
    }

    /// Stores the animal; the returned DTO carries the assigned id.
    pub fn create(&self, dto: &AnimalDto) -> ServiceResult<AnimalDto> {
        let animal = self.translator.translate_from(dto);
        let created = self.domain.create(&animal)?;
        Ok(self.translator.translate_to(&created))
    }

    /// Saves the animal through the domain `create` path.
    ///
    /// Storage `create` overwrites an existing id, so existing animals are
    /// updated in place; an unknown id is created instead of reported as
    /// not found.
    pub fn update(&self, dto: &AnimalDto) -> ServiceResult<AnimalDto> {
        let animal = self.translator.translate_from(dto);
        let saved = self.domain.create(&animal)?;
        Ok(self.translator.translate_to(&saved))
    }

    /// # Errors
    /// - `InvalidInput` when the DTO has no id.
    pub fn delete(&self, dto: &AnimalDto) -> ServiceResult<()> {
        let animal = self.translator.translate_from(dto);
        self.domain.delete(&animal)
    }
}

impl<D> AnimalWebService<D>
where
    D: AnimalDomainService,
{
    /// Wires the DTO translator used in production.
    pub fn with_default_translator(domain: D) -> Self {
        Self::new(domain, AnimalWebTranslator)
    }
}
