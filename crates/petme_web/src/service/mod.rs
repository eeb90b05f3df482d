//! Web services: the domain operation set re-exposed over DTOs.
//!
//! # Invariants
//! - No validation or error translation happens here; `ServiceError` from the
//!   domain layer propagates unchanged.

pub mod animal_web_service;
pub mod breed_web_service;
