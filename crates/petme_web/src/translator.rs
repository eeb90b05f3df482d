//! Domain entity <-> DTO translators.

use crate::dto::{AnimalDto, BreedDto};
use petme_core::{Animal, Breed, Translator};

/// Maps `Animal` <-> `AnimalDto`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnimalWebTranslator;

impl Translator<Animal, AnimalDto> for AnimalWebTranslator {
    fn translate_to(&self, source: &Animal) -> AnimalDto {
        AnimalDto {
            id: source.id.clone(),
            name: source.name.clone(),
        }
    }

    fn translate_from(&self, target: &AnimalDto) -> Animal {
        Animal {
            id: target.id.clone(),
            name: target.name.clone(),
        }
    }
}

/// Maps `Breed` <-> `BreedDto`, delegating the nested animal to `A`.
#[derive(Debug, Clone, Default)]
pub struct BreedWebTranslator<A = AnimalWebTranslator> {
    animal_translator: A,
}

impl<A> BreedWebTranslator<A>
where
    A: Translator<Animal, AnimalDto>,
{
    pub fn new(animal_translator: A) -> Self {
        Self { animal_translator }
    }
}

impl<A> Translator<Breed, BreedDto> for BreedWebTranslator<A>
where
    A: Translator<Animal, AnimalDto>,
{
    fn translate_to(&self, source: &Breed) -> BreedDto {
        BreedDto {
            id: source.id.clone(),
            name: source.name.clone(),
            animal: source
                .animal
                .as_ref()
                .map(|animal| self.animal_translator.translate_to(animal)),
        }
    }

    fn translate_from(&self, target: &BreedDto) -> Breed {
        Breed {
            id: target.id.clone(),
            name: target.name.clone(),
            animal: target
                .animal
                .as_ref()
                .map(|animal| self.animal_translator.translate_from(animal)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breed_dto_round_trip_preserves_nested_animal() {
        let translator = BreedWebTranslator::new(AnimalWebTranslator);
        let breed = Breed::new("br123", "Golden Retriever", Animal::new("an123", "Dog"));

        let dto = translator.translate_to(&breed);
        assert_eq!(
            dto.animal,
            Some(AnimalDto {
                id: Some("an123".to_string()),
                name: Some("Dog".to_string()),
            })
        );
        assert_eq!(translator.translate_from(&dto), breed);
    }

    #[test]
    fn absent_animal_stays_absent() {
        let translator = BreedWebTranslator::<AnimalWebTranslator>::default();
        let dto = BreedDto {
            id: None,
            name: Some("Mixed".to_string()),
            animal: None,
        };

        let breed = translator.translate_from(&dto);

        assert_eq!(breed.animal, None);
        assert_eq!(translator.translate_to(&breed), dto);
    }
}
