//! Repository trait definitions for the domain layer.
//!
//! These traits are the seams between services and external systems.
//! Implementations live in [`crate::infrastructure`]; mock implementations
//! are generated via `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`ExperienceRepository`] - Events and leads in the record store
//! - [`TokenIntrospector`] - Bearer token validation against the identity provider
//! - [`UserRepository`] - Legacy `users` table

pub mod experience_repository;
pub mod token_introspector;
pub mod user_repository;

pub use experience_repository::ExperienceRepository;
pub use token_introspector::{Introspection, TokenIntrospector};
pub use user_repository::UserRepository;

#[cfg(test)]
pub use experience_repository::MockExperienceRepository;
#[cfg(test)]
pub use token_introspector::MockTokenIntrospector;
#[cfg(test)]
pub use user_repository::MockUserRepository;
