//! Infrastructure layer for external integrations.
//!
//! Concrete implementations of the domain repository traits.
//!
//! # Modules
//!
//! - [`pocketbase`] - Events and leads in the PocketBase record store
//! - [`keycloak`] - Token introspection against Keycloak
//! - [`persistence`] - PostgreSQL repository for the legacy users table

pub mod keycloak;
pub mod persistence;
pub mod pocketbase;
