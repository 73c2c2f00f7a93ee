//! Domain layer containing business entities and repository contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Events, leads and legacy users as plain value objects
//! - [`repositories`] - Traits implemented by the infrastructure layer
//!
//! The domain layer has no dependency on HTTP, PocketBase or Keycloak.
//! Concrete adapters live in [`crate::infrastructure`].

pub mod entities;
pub mod repositories;
