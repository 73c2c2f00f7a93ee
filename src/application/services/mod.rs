//! Business logic services for the application layer.

pub mod auth_service;
pub mod experience_service;
pub mod user_service;

pub use auth_service::{AuthService, Principal};
pub use experience_service::ExperienceService;
pub use user_service::UserService;
