//! Domain Layer - Contact entity and persistence interface
//!
//! This layer contains:
//! - Domain entities (Contact, NewContact)
//! - Repository traits (interfaces)

pub mod entity;
pub mod repository;
