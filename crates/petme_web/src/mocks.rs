//! `mockall` doubles of the domain service traits.

use mockall::mock;
use petme_core::{
    Animal, AnimalDomainService, Breed, BreedDomainService, ServiceResult,
};

mock! {
    pub AnimalDomain {}

    impl AnimalDomainService for AnimalDomain {
        fn get_all(&self) -> ServiceResult<Vec<Animal>>;
        fn get_one(&self, id: &str) -> ServiceResult<Animal>;
        fn create(&self, animal: &Animal) -> ServiceResult<Animal>;
        fn update(&self, animal: &Animal) -> ServiceResult<Animal>;
        fn delete(&self, animal: &Animal) -> ServiceResult<()>;
    }
}

mock! {
    pub BreedDomain {}

    impl BreedDomainService for BreedDomain {
        fn get_all(&self) -> ServiceResult<Vec<Breed>>;
        fn get_one(&self, id: &str) -> ServiceResult<Breed>;
        fn create(&self, breed: &Breed) -> ServiceResult<Breed>;
        fn update(&self, breed: &Breed) -> ServiceResult<Breed>;
        fn delete(&self, breed: &Breed) -> ServiceResult<()>;
        fn get_by_animal(&self, animal: &Animal) -> ServiceResult<Vec<Breed>>;
    }
}
