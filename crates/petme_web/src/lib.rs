//! Web-facing layer for PetMe.
//!
//! # Responsibility
//! - Define the DTOs exchanged with external callers.
//! - Re-expose domain services over DTOs and JSON request handlers.
//!
//! # Invariants
//! - Nothing in this crate talks to storage directly.

pub mod api;
pub mod dto;
pub mod service;
pub mod translator;

#[cfg(test)]
mod mocks;

pub use api::{AnimalApi, ApiErrorBody, ApiResponse, BreedApi};
pub use dto::{AnimalDto, BreedDto};
pub use service::animal_web_service::AnimalWebService;
pub use service::breed_web_service::BreedWebService;
pub use translator::{AnimalWebTranslator, BreedWebTranslator};
