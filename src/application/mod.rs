//! Application layer services.
//!
//! Services sit between HTTP handlers and repositories. Handlers never reach
//! a repository directly.
//!
//! # Available Services
//!
//! - [`services::experience_service::ExperienceService`] - Events and leads
//! - [`services::auth_service::AuthService`] - Bearer token authentication
//! - [`services::user_service::UserService`] - Legacy user lookup and update

pub mod services;
