//! Repository trait definitions for the domain layer.
//!
//! This module defines the repository interface that abstracts mapping
//! storage following the Repository pattern. The trait is implemented by
//! concrete stores in the infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::store`
//! - Mock implementations are auto-generated via `mockall` for testing

pub mod mapping_repository;

pub use mapping_repository::MappingRepository;

#[cfg(test)]
pub use mapping_repository::MockMappingRepository;
