//! # Thunder Events
//!
//! Backend for an events marketing site. Serves event listings and captures
//! leads from a PocketBase record store, and protects event creation with
//! Keycloak token introspection.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities and repository traits
//! - **Application Layer** ([`application`]) - Services between handlers and adapters
//! - **Infrastructure Layer** ([`infrastructure`]) - PocketBase, Keycloak and PostgreSQL adapters
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Binaries
//!
//! - `thunder-events` - events and leads API ([`server::run`])
//! - `users-api` - legacy user lookup backed by PostgreSQL ([`server::run_users`])
//!
//! ## Quick Start
//!
//! ```bash
//! export POCKETBASE_BASE_URL="http://localhost:8090"
//! export POCKETBASE_ADMIN_TOKEN="..."
//! export KEYCLOAK_BASE_URL="https://sso.example.com"
//! export KEYCLOAK_REALM="thunder"
//! export KEYCLOAK_CLIENT_ID="thunder-api"
//! export KEYCLOAK_CLIENT_SECRET="..."
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`]
//! and [`config::UsersConfig`]. See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;
pub mod telemetry;

pub mod routes;

pub use error::AppError;
pub use state::{AppState, UsersState};

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{
        AuthService, ExperienceService, Principal, UserService,
    };
    pub use crate::domain::entities::{Event, EventInput, Lead, LeadInput, User, UserUpdate};
    pub use crate::error::AppError;
    pub use crate::state::{AppState, UsersState};
}
