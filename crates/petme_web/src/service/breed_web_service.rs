//! Breed web service.

use crate::dto::{AnimalDto, BreedDto};
use crate::translator::{AnimalWebTranslator, BreedWebTranslator};
use petme_core::{Animal, Breed, BreedDomainService, ServiceResult, Translator};

/// Forwards DTO calls to a `BreedDomainService`.
pub struct BreedWebService<D, BT = BreedWebTranslator, AT = AnimalWebTranslator> {
    domain: D,
    breed_translator: BT,
    animal_translator: AT,
}

impl<D, BT, AT> BreedWebService<D, BT, AT>
where
    D: BreedDomainService,
    BT: Translator<Breed, BreedDto>,
    AT: Translator<Animal, AnimalDto>,
{
    /// `animal_translator` maps the query of `get_by_animal`; nested animals
    /// go through `breed_translator`.
    pub fn new(domain: D, breed_translator: BT, animal_translator: AT) -> Self {
        Self {
            domain,
            breed_translator,
            animal_translator,
        }
    }

    /// All breeds as DTOs, in domain order.
    pub fn get_all(&self) -> ServiceResult<Vec<BreedDto>> {
        let breeds = self.domain.get_all()?;
        Ok(self.translate_all(&breeds))
    }

    /// # Errors
    /// - `NotFound` when no breed has `id`.
    pub fn get_one(&self, id: &str) -> ServiceResult<BreedDto> {
        let breed = self.domain.get_one(id)?;
        Ok(self.breed_translator.translate_to(&breed))
    }

    /// Stores the breed; the returned DTO carries the assigned id.
    pub fn create(&self, dto: &BreedDto) -> ServiceResult<BreedDto> {
        let breed = self.breed_translator.translate_from(dto);
        let created = self.domain.create(&breed)?;
        Ok(self.breed_translator.translate_to(&created))
    }

    /// Updates through the domain `update` path.
    ///
    /// # Errors
    /// - `InvalidInput` without an id, `NotFound` for an unknown id.
    pub fn update(&self, dto: &BreedDto) -> ServiceResult<BreedDto> {
        let breed = self.breed_translator.translate_from(dto);
        let updated = self.domain.update(&breed)?;
        Ok(self.breed_translator.translate_to(&updated))
    }

    /// # Errors
    /// - `InvalidInput` when the DTO has no id.
    pub fn delete(&self, dto: &BreedDto) -> ServiceResult<()> {
        let breed = self.breed_translator.translate_from(dto);
        self.domain.delete(&breed)
    }

    /// Breeds whose animal id equals `animal.id`.
    ///
    /// # Errors
    /// - `InvalidInput` when the animal DTO has no id.
    pub fn get_by_animal(&self, animal: &AnimalDto) -> ServiceResult<Vec<BreedDto>> {
        let animal = self.animal_translator.translate_from(animal);
        let breeds = self.domain.get_by_animal(&animal)?;
        Ok(self.translate_all(&breeds))
    }

    fn translate_all(&self, breeds: &[Breed]) -> Vec<BreedDto> {
        breeds
            .iter()
            .map(|breed| self.breed_translator.translate_to(breed))
            .collect()
    }
}

impl<D> BreedWebService<D>
where
    D: BreedDomainService,
{
    /// Wires the DTO translators used in production.
    pub fn with_default_translators(domain: D) -> Self {
        Self::new(
            domain,
            BreedWebTranslator::new(AnimalWebTranslator),
            AnimalWebTranslator,
        )
    }
}
