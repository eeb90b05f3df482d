//! Domain entities for animal and breed records.
//!
//! # Responsibility
//! - Define the business representation shared by domain services.
//! - Stay decoupled from both the web DTOs and the storage records.
//!
//! # Invariants
//! - Absent fields are `None`; nothing in this layer synthesizes values.
//! - A breed holds a copy of its animal, not ownership of the animal record.

pub mod animal;
pub mod breed;
